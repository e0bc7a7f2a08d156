//! Error types for input parsing, game operations, and sessions.

use thiserror::Error;

/// Malformed interactive input. The message is shown before re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The line was empty.
    #[error("no input")]
    Empty,
    /// The bet contained something other than decimal digits.
    #[error("Enter digits only.")]
    NotDigits,
    /// The bet was larger than the bankroll.
    #[error("Bet must be between 0 and {max}.")]
    OutOfRange {
        /// Largest accepted bet.
        max: usize,
    },
    /// The action letter was not recognised.
    #[error("Please enter H, S, or Q.")]
    UnknownAction,
    /// The yes/no answer was not recognised.
    #[error("Please enter Y or N.")]
    UnknownAnswer,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that end an interactive session.
///
/// Engine errors here mean the round loop drove the game out of order.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the console failed.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play or showdown failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
