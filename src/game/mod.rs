//! Game engine and state management.

use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Record;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A blackjack engine for one player against a scripted dealer.
///
/// The game owns the deck, both hands, the bankroll, and the session record.
/// It performs no I/O; drive it with [`Session`](crate::Session) or directly.
///
/// # Example
///
/// ```
/// use termjack::{Game, GameOptions, GameState};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.bet(10).unwrap();
/// let _ = game.deal().unwrap();
/// if game.state() == GameState::PlayerTurn {
///     game.stand().unwrap();
///     game.dealer_play().unwrap();
/// }
/// let result = game.showdown().unwrap();
/// assert_eq!(result.bet, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// The deck, kept for the whole session.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Player money.
    bankroll: usize,
    /// Bet for the current round.
    bet: usize,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand. The first card is the hole card.
    dealer: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
    /// Wins, losses, and pushes so far.
    record: Record,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new game that deals from `deck`.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let bankroll = options.starting_bankroll;
        Self {
            deck,
            options,
            state: GameState::Betting,
            bankroll,
            bet: 0,
            player: Hand::new(),
            dealer: Hand::new(),
            hole_revealed: false,
            record: Record {
                wins: 0,
                losses: 0,
                pushes: 0,
            },
        }
    }

    /// Refills an empty bankroll to the starting amount.
    ///
    /// Only acts between rounds. Returns `true` if the bankroll was refilled.
    pub fn replenish(&mut self) -> bool {
        if self.state != GameState::Betting || self.bankroll > 0 {
            return false;
        }
        self.bankroll = self.options.starting_bankroll;
        log::info!("bankroll exhausted, reset to {}", self.bankroll);
        true
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's money.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the bet for the round in progress, or 0 between rounds.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.bet
    }

    /// Returns the session record.
    #[must_use]
    pub const fn record(&self) -> Record {
        self.record
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns whether the dealer's hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Returns the number of cards left before the deck reshoes.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }
}
