use crate::card::Card;
use crate::error::ActionError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if matches!(self.state, GameState::PlayerTurn) {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player's turn and moves the game to the dealer turn,
    /// where [`dealer_play`](Game::dealer_play) draws nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.deal();
        self.player.add(card);

        if self.player.is_bust() {
            self.state = GameState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Player action: abandon the round.
    ///
    /// No money changes hands and the record is untouched; the game returns
    /// to betting.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn quit_round(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        let result = RoundResult {
            outcome: RoundOutcome::Abandoned,
            bet: self.bet,
            net: 0,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            player_bust: false,
            dealer_bust: false,
            dealer_blackjack: false,
        };

        log::info!("round abandoned with bet {}", self.bet);
        self.bet = 0;
        self.state = GameState::Betting;
        Ok(result)
    }
}
