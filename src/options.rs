//! Game configuration options.

/// Bankroll a session starts with, and is refilled to when it runs dry.
pub const DEFAULT_STARTING_BANKROLL: usize = 100;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use termjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_bankroll(250)
///     .with_color(true);
/// assert_eq!(options.starting_bankroll, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Bankroll at the start of the session and after going broke.
    pub starting_bankroll: usize,
    /// Whether cards are printed with ANSI colours.
    pub color: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: DEFAULT_STARTING_BANKROLL,
            color: false,
        }
    }
}

impl GameOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use termjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(500);
    /// assert_eq!(options.starting_bankroll, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, starting_bankroll: usize) -> Self {
        self.starting_bankroll = starting_bankroll;
        self
    }

    /// Sets whether cards are coloured.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
