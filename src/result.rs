//! Comparison result types.

use crate::hand::Classification;

/// Which of two compared hands is stronger.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The first hand wins.
    First,
    /// The second hand wins.
    Second,
}

/// Outcome of comparing two hands, including how each was classified.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Showdown {
    /// Classification of the first hand.
    pub first: Classification,
    /// Classification of the second hand.
    pub second: Classification,
    /// The stronger hand.
    pub winner: Winner,
}

impl Showdown {
    /// Classification of the winning hand.
    #[must_use]
    pub const fn winning(&self) -> &Classification {
        match self.winner {
            Winner::First => &self.first,
            Winner::Second => &self.second,
        }
    }
}
