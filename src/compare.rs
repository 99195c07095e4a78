//! Two-hand comparison.

use core::cmp::Ordering;

use tracing::debug;

use crate::card::Card;
use crate::error::CompareError;
use crate::hand::{Classification, classify};
use crate::result::{Showdown, Winner};

/// Compares two already classified hands.
///
/// A stronger category always wins. Within a category the deciding cards are
/// compared by adjusted rank, then by suit.
///
/// # Errors
///
/// Returns [`CompareError::ComparisonExhausted`] if category, adjusted rank,
/// and suit are all equal, which cannot happen with cards from one deck.
pub fn compare_classified(
    first: &Classification,
    second: &Classification,
) -> Result<Winner, CompareError> {
    match first.strength().cmp(&second.strength()) {
        Ordering::Greater => Ok(Winner::First),
        Ordering::Less => Ok(Winner::Second),
        Ordering::Equal => {
            debug!(
                category = ?first.category,
                deciding = ?first.deciding,
                "hands are indistinguishable"
            );
            Err(CompareError::ComparisonExhausted)
        }
    }
}

/// Classifies and compares two hands, keeping both classifications.
///
/// # Errors
///
/// Returns [`CompareError::FirstHand`] or [`CompareError::SecondHand`] if a
/// hand has an invalid size, and [`CompareError::ComparisonExhausted`] if the
/// hands tie completely.
pub fn showdown(first: &[Card], second: &[Card]) -> Result<Showdown, CompareError> {
    let first = classify(first).map_err(CompareError::FirstHand)?;
    let second = classify(second).map_err(CompareError::SecondHand)?;

    debug!(category = ?first.category, deciding = ?first.deciding, "first hand");
    debug!(category = ?second.category, deciding = ?second.deciding, "second hand");

    let winner = compare_classified(&first, &second)?;
    debug!(?winner, "hands compared");

    Ok(Showdown {
        first,
        second,
        winner,
    })
}

/// Compares two hands and returns the stronger one.
///
/// # Example
///
/// ```
/// use bigtwo::{Card, Rank, Suit, Winner, compare};
///
/// let two = [Card::new(Suit::Plum, Rank::Two)];
/// let ace = [Card::new(Suit::Spades, Rank::Ace)];
/// assert_eq!(compare(&two, &ace), Ok(Winner::First));
/// ```
///
/// # Errors
///
/// See [`showdown`].
pub fn compare(first: &[Card], second: &[Card]) -> Result<Winner, CompareError> {
    showdown(first, second).map(|result| result.winner)
}
