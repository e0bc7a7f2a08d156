//! A single-player terminal blackjack game.
//!
//! The crate provides a [`Game`] engine that deals from a seedable [`Deck`],
//! values [`Hand`]s, and settles bets against a dealer who draws to 17, plus a
//! [`Session`] that plays rounds of it over any text console.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use termjack::{Game, GameOptions, Session};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let mut session = Session::new(game, Cursor::new("0\n"), Vec::new());
//! session.run().unwrap();
//! assert_eq!(session.game().bankroll(), 100);
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Action, Console};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, InputError, SessionError, ShowdownError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::{DEFAULT_STARTING_BANKROLL, GameOptions};
pub use result::{Record, RoundOutcome, RoundResult};
pub use session::Session;
