//! Dealing configuration options.

/// Configuration options for dealing a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bigtwo::DealOptions;
///
/// let options = DealOptions::default().with_players(3);
/// assert_eq!(options.players, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealOptions {
    /// Number of players sharing the deck.
    pub players: u8,
}

impl Default for DealOptions {
    fn default() -> Self {
        Self { players: 4 }
    }
}

impl DealOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::DealOptions;
    ///
    /// let options = DealOptions::default().with_players(2);
    /// assert_eq!(options.players, 2);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Cards each player receives from a deck of `deck_len` cards.
    #[must_use]
    pub const fn cards_per_player(&self, deck_len: usize) -> usize {
        if self.players == 0 {
            0
        } else {
            deck_len / self.players as usize
        }
    }
}
