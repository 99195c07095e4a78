//! Deck construction, shuffling, and dealing.
//!
//! The classifier only consumes card slices; these helpers produce them.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::options::DealOptions;

/// Creates an unshuffled deck of 52 unique cards, suit by suit.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Shuffles cards in place using the given generator.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Splits `cards` into one contiguous hand per player, preserving order.
///
/// Every player receives `cards.len() / players` cards; any remainder is left
/// undealt.
///
/// # Errors
///
/// Returns an error if there are no players or more players than cards in a
/// deck.
pub fn deal(cards: &[Card], options: &DealOptions) -> Result<Vec<Vec<Card>>, DealError> {
    let players = options.players;
    if players == 0 {
        return Err(DealError::NoPlayers);
    }
    if players as usize > DECK_SIZE {
        return Err(DealError::TooManyPlayers { players });
    }

    let per_player = options.cards_per_player(cards.len());
    let hands = (0..players as usize)
        .map(|seat| {
            cards
                .get(seat * per_player..(seat + 1) * per_player)
                .unwrap_or_default()
                .to_vec()
        })
        .collect();

    Ok(hands)
}

/// Deals shuffled decks from a seeded generator.
///
/// The same seed and options always produce the same sequence of deals.
#[derive(Debug, Clone)]
pub struct Dealer {
    options: DealOptions,
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a new dealer with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{DealOptions, Dealer};
    ///
    /// let mut dealer = Dealer::new(DealOptions::default(), 42);
    /// let hands = dealer.deal_round().unwrap();
    /// assert_eq!(hands.len(), 4);
    /// assert!(hands.iter().all(|hand| hand.len() == 13));
    /// ```
    #[must_use]
    pub fn new(options: DealOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the dealing options.
    #[must_use]
    pub const fn options(&self) -> &DealOptions {
        &self.options
    }

    /// Builds a fresh deck, shuffles it, and deals it out.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, see [`deal`].
    pub fn deal_round(&mut self) -> Result<Vec<Vec<Card>>, DealError> {
        let mut cards = standard_deck();
        shuffle(&mut cards, &mut self.rng);

        debug!(players = self.options.players, "dealing shuffled deck");
        deal(&cards, &self.options)
    }
}
