//! Game configuration options.

/// Balance given to new and restarted sessions unless configured otherwise.
pub const DEFAULT_STARTING_BALANCE: usize = 1000;

/// Configuration options for the blackjack engine.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjchat::GameOptions;
///
/// let options = GameOptions::default().with_starting_balance(250);
/// assert_eq!(options.starting_balance, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Balance for a sender's first session and for every `restart`.
    pub starting_balance: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    #[must_use]
    pub const fn with_starting_balance(mut self, starting_balance: usize) -> Self {
        self.starting_balance = starting_balance;
        self
    }
}
