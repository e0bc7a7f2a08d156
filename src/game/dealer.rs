use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

/// The dealer draws while below this value, soft totals included.
const DEALER_STANDS_AT: u8 = 17;

fn signed(amount: usize) -> isize {
    isize::try_from(amount).unwrap_or(isize::MAX)
}

impl Game {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer reveals the hole card and draws while the hand is below 17,
    /// with no distinction between hard and soft totals. If the player busted,
    /// the dealer turn is skipped: nothing is drawn and the hole card stays
    /// hidden.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        if self.player.is_bust() {
            self.state = GameState::RoundOver;
            return Ok(drawn_cards);
        }

        self.hole_revealed = true;
        while self.dealer.value() < DEALER_STANDS_AT {
            let card = self.deck.deal();
            self.dealer.add(card);
            drawn_cards.push(card);
        }

        log::debug!(
            "dealer drew {} card(s), final {}",
            drawn_cards.len(),
            self.dealer.value()
        );

        self.state = GameState::RoundOver;
        Ok(drawn_cards)
    }

    /// Settles the round, updating the bankroll and the record.
    ///
    /// Naturals are settled first: both blackjack push, a player blackjack
    /// pays `bet * 3 / 2`, a dealer blackjack takes the bet. Then a player
    /// bust loses, a dealer bust wins, and otherwise the higher value wins
    /// even money with ties pushing.
    ///
    /// The hands stay in place for display until the next deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let bet = self.bet;
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let player_bust = self.player.is_bust();
        let dealer_bust = self.dealer.is_bust();
        let player_blackjack = self.player.is_blackjack();
        let dealer_blackjack = self.dealer.is_blackjack();

        let (outcome, net) = if player_blackjack && dealer_blackjack {
            (RoundOutcome::Push, 0)
        } else if player_blackjack {
            (RoundOutcome::Blackjack, signed(bet.saturating_mul(3) / 2))
        } else if dealer_blackjack || player_bust {
            (RoundOutcome::Lose, -signed(bet))
        } else if dealer_bust || player_value > dealer_value {
            (RoundOutcome::Win, signed(bet))
        } else if player_value < dealer_value {
            (RoundOutcome::Lose, -signed(bet))
        } else {
            (RoundOutcome::Push, 0)
        };

        self.bankroll = self.bankroll.saturating_add_signed(net);
        self.record.tally(outcome);

        log::info!(
            "round settled: {outcome:?} (player {player_value}, dealer {dealer_value}), net {net}, bankroll {}",
            self.bankroll
        );

        self.bet = 0;
        self.state = GameState::Betting;

        Ok(RoundResult {
            outcome,
            bet,
            net,
            player_value,
            dealer_value,
            player_bust,
            dealer_bust,
            dealer_blackjack,
        })
    }
}
