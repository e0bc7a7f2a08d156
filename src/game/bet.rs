use crate::error::{BetError, DealError};

use super::{Game, GameState};

impl Game {
    /// Places the bet for the next round.
    ///
    /// The bankroll is not debited here; [`showdown`](Game::showdown) applies
    /// the net result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the bet is zero,
    /// or the bet exceeds the bankroll.
    pub fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.bet = amount;
        self.state = GameState::Dealing;
        Ok(())
    }

    /// Deals two cards each to the player and the dealer, alternating.
    ///
    /// If either hand is a blackjack the hole card is revealed and the round
    /// skips straight to [`GameState::RoundOver`]; returns `true` in that case.
    /// Otherwise the game moves to [`GameState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed for this round.
    pub fn deal(&mut self) -> Result<bool, DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        self.player.clear();
        self.dealer.clear();
        self.hole_revealed = false;

        // Player, dealer (hole), player, dealer (up)
        self.player.add(self.deck.deal());
        self.dealer.add(self.deck.deal());
        self.player.add(self.deck.deal());
        self.dealer.add(self.deck.deal());

        log::debug!(
            "dealt player {} / dealer {}",
            self.player.render(false),
            self.dealer.render(false)
        );

        if self.player.is_blackjack() || self.dealer.is_blackjack() {
            self.hole_revealed = true;
            self.state = GameState::RoundOver;
            return Ok(true);
        }

        self.state = GameState::PlayerTurn;
        Ok(false)
    }
}
