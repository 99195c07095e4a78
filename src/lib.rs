//! Hand classification and comparison for the Big Two card game, with
//! optional `no_std` support.
//!
//! Ranks compare as Two > Ace > King > ... > Three and suits as
//! Spades > Heart > Block > Plum. A hand of one to five cards is classified
//! with [`classify`] into a [`Category`] and a deciding card, and two hands
//! are settled with [`compare`].
//!
//! # Example
//!
//! ```
//! use bigtwo::{Card, Rank, Suit, Winner, compare};
//!
//! let pair_of_kings = [
//!     Card::new(Suit::Heart, Rank::King),
//!     Card::new(Suit::Plum, Rank::King),
//! ];
//! let pair_of_twos = [
//!     Card::new(Suit::Block, Rank::Two),
//!     Card::new(Suit::Plum, Rank::Two),
//! ];
//! assert_eq!(compare(&pair_of_kings, &pair_of_twos), Ok(Winner::Second));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod compare;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use compare::{compare, compare_classified, showdown};
pub use deck::{Dealer, deal, shuffle, standard_deck};
pub use error::{CompareError, DealError, HandError};
pub use hand::{Category, Classification, MAX_HAND_SIZE, classify};
pub use options::DealOptions;
pub use result::{Showdown, Winner};
