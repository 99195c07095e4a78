//! Hand categories and classification.

use tracing::{debug, trace};

use crate::card::{Card, Rank, Suit};
use crate::error::HandError;

/// Largest number of cards a hand may hold.
pub const MAX_HAND_SIZE: usize = 5;

/// Hand category, ordered from weakest to strongest.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// No grouping; the strongest card decides.
    Single,
    /// Two cards of the same rank.
    Pair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Three of one rank and two of another.
    FullHouse,
    /// Four of one rank plus one other card.
    FourOfAKind,
    /// Five cards in sequence, all of one suit.
    StraightFlush,
}

impl Category {
    /// All categories in ascending strength.
    pub const ALL: [Self; 7] = [
        Self::Single,
        Self::Pair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
    ];
}

/// Result of classifying a hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    /// The hand category.
    pub category: Category,
    /// The card whose rank and suit settle ties within the category.
    pub deciding: Card,
}

impl Classification {
    /// Creates a new classification.
    #[must_use]
    pub const fn new(category: Category, deciding: Card) -> Self {
        Self { category, deciding }
    }

    /// Sort key for comparing two classified hands: category, then adjusted
    /// rank of the deciding card, then its suit.
    #[must_use]
    pub const fn strength(&self) -> (Category, u8, Suit) {
        (
            self.category,
            self.deciding.adjusted_value(),
            self.deciding.suit,
        )
    }
}

/// Card count and highest suit for each of the 13 ranks.
struct RankGroups {
    counts: [u8; 13],
    top_suit: [Option<Suit>; 13],
}

impl RankGroups {
    fn new(cards: &[Card]) -> Self {
        let mut groups = Self {
            counts: [0; 13],
            top_suit: [None; 13],
        };

        for card in cards {
            let idx = card.rank.index();
            groups.counts[idx] = groups.counts[idx].saturating_add(1);
            groups.top_suit[idx] = groups.top_suit[idx].max(Some(card.suit));
        }

        groups
    }

    fn has_count(&self, count: u8) -> bool {
        self.counts.contains(&count)
    }

    /// Strongest group of exactly `count` cards, represented by its
    /// highest-suit card.
    ///
    /// Groups are ranked by adjusted value, so Twos beat Aces and Aces beat
    /// every other rank.
    fn best_group(&self, count: u8) -> Option<Card> {
        let rank = Rank::ALL
            .into_iter()
            .filter(|rank| self.counts[rank.index()] == count)
            .max_by_key(|rank| rank.adjusted_value())?;

        self.top_suit[rank.index()].map(|suit| Card::new(suit, rank))
    }

    fn four_of_a_kind(&self) -> Option<Card> {
        if self.has_count(1) {
            self.best_group(4)
        } else {
            None
        }
    }

    fn full_house(&self) -> Option<Card> {
        if self.has_count(2) {
            self.best_group(3)
        } else {
            None
        }
    }
}

fn is_flush(cards: &[Card]) -> bool {
    cards
        .split_first()
        .is_some_and(|(first, rest)| rest.iter().all(|card| card.suit == first.suit))
}

/// Returns the anchor card of a five-card straight, or `None` if the cards
/// do not form one.
///
/// Only two runs may cross the Ace: A-2-3-4-5 (anchored on the Five) and
/// 10-J-Q-K-A (anchored on the Ace). 2-3-4-5-6 is anchored on the Two.
fn straight_anchor(cards: &[Card]) -> Option<Card> {
    let mut sorted: [Card; MAX_HAND_SIZE] = cards.try_into().ok()?;
    sorted.sort_unstable_by(|a, b| a.rank.cmp_sequence(b.rank));

    let ranks = sorted.map(|card| card.rank);
    let consecutive = ranks
        .windows(2)
        .all(|pair| pair[1].sequence_value() == pair[0].sequence_value() + 1);

    let [low, .., high] = sorted;
    match ranks {
        [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five] => Some(high),
        [Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] => Some(low),
        [Rank::Ace, ..] => None,
        [Rank::Two, .., Rank::Six] if consecutive => Some(low),
        _ if consecutive => Some(high),
        _ => None,
    }
}

/// Classifies a hand of one to five cards.
///
/// Categories are tried from strongest to weakest and the first match wins.
/// The input slice is never reordered.
///
/// # Example
///
/// ```
/// use bigtwo::{Card, Category, Rank, Suit, classify};
///
/// let hand = [
///     Card::new(Suit::Spades, Rank::Six),
///     Card::new(Suit::Spades, Rank::Eight),
///     Card::new(Suit::Spades, Rank::Nine),
///     Card::new(Suit::Spades, Rank::Seven),
///     Card::new(Suit::Spades, Rank::Five),
/// ];
/// let result = classify(&hand).unwrap();
/// assert_eq!(result.category, Category::StraightFlush);
/// assert_eq!(result.deciding, Card::new(Suit::Spades, Rank::Nine));
/// ```
///
/// # Errors
///
/// Returns [`HandError::InvalidHandSize`] if the hand is empty or holds more
/// than five cards.
pub fn classify(cards: &[Card]) -> Result<Classification, HandError> {
    let len = cards.len();
    if len == 0 || len > MAX_HAND_SIZE {
        debug!(len, "rejecting hand of invalid size");
        return Err(HandError::InvalidHandSize { len });
    }

    let groups = RankGroups::new(cards);
    let straight = straight_anchor(cards);

    let classification = if let Some(anchor) = straight.filter(|_| is_flush(cards)) {
        Classification::new(Category::StraightFlush, anchor)
    } else if let Some(deciding) = groups.four_of_a_kind() {
        Classification::new(Category::FourOfAKind, deciding)
    } else if let Some(deciding) = groups.full_house() {
        Classification::new(Category::FullHouse, deciding)
    } else if let Some(anchor) = straight {
        Classification::new(Category::Straight, anchor)
    } else if let Some(deciding) = groups.best_group(3) {
        Classification::new(Category::ThreeOfAKind, deciding)
    } else if let Some(deciding) = groups.best_group(2) {
        Classification::new(Category::Pair, deciding)
    } else {
        let deciding = cards
            .iter()
            .copied()
            .max_by_key(|card| (card.adjusted_value(), card.suit))
            .ok_or(HandError::InvalidHandSize { len })?;
        Classification::new(Category::Single, deciding)
    };

    trace!(
        category = ?classification.category,
        deciding = ?classification.deciding,
        "classified hand"
    );
    Ok(classification)
}
