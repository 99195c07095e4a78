//! Card types and the two rank orderings used by Big Two.

use core::cmp::Ordering;

/// Card suit, ordered from weakest to strongest tie-break.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Plum (clubs).
    Plum,
    /// Block (diamonds).
    Block,
    /// Heart.
    Heart,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in ascending tie-break order.
    pub const ALL: [Self; 4] = [Self::Plum, Self::Block, Self::Heart, Self::Spades];
}

/// Card rank.
///
/// The derived ordering is the *sequence* order (Ace lowest, King highest),
/// which is the order used for straights. Use [`Rank::cmp_adjusted`] or
/// [`Rank::adjusted_value`] when deciding which of two ranks is stronger.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in sequence order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position in sequence order, `1` for Ace through `13` for King.
    #[must_use]
    pub const fn sequence_value(self) -> u8 {
        self as u8
    }

    /// Strength used when comparing ranks.
    ///
    /// Three through King keep their face value, Ace is `14` and Two is `15`.
    ///
    /// ```
    /// use bigtwo::Rank;
    ///
    /// assert!(Rank::Two.adjusted_value() > Rank::Ace.adjusted_value());
    /// assert!(Rank::Ace.adjusted_value() > Rank::King.adjusted_value());
    /// ```
    #[must_use]
    pub const fn adjusted_value(self) -> u8 {
        match self {
            Self::Two => 15,
            Self::Ace => 14,
            other => other as u8,
        }
    }

    /// Compares two ranks in sequence order.
    #[must_use]
    pub fn cmp_sequence(self, other: Self) -> Ordering {
        self.sequence_value().cmp(&other.sequence_value())
    }

    /// Compares two ranks by strength (Two > Ace > King > ... > Three).
    #[must_use]
    pub fn cmp_adjusted(self, other: Self) -> Ordering {
        self.adjusted_value().cmp(&other.adjusted_value())
    }

    /// Returns the rank whose sequence value is `value`, if any.
    #[must_use]
    pub const fn from_sequence_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }
}

/// A playing card.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Shorthand for `self.rank.adjusted_value()`.
    #[must_use]
    pub const fn adjusted_value(self) -> u8 {
        self.rank.adjusted_value()
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
