//! Error types for classification, comparison, and dealing.

use thiserror::Error;

/// Errors that can occur while classifying a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Hand must hold between one and five cards.
    #[error("invalid hand size {len}, expected 1 to 5 cards")]
    InvalidHandSize {
        /// Number of cards submitted.
        len: usize,
    },
}

/// Errors that can occur while comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The first hand could not be classified.
    #[error("first hand: {0}")]
    FirstHand(#[source] HandError),
    /// The second hand could not be classified.
    #[error("second hand: {0}")]
    SecondHand(#[source] HandError),
    /// Both hands tie on category, rank, and suit.
    #[error("hands tie on category, rank and suit")]
    ComparisonExhausted,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No players to deal to.
    #[error("no players to deal to")]
    NoPlayers,
    /// More players than cards in the deck.
    #[error("too many players: {players}")]
    TooManyPlayers {
        /// Requested number of players.
        players: u8,
    },
}
