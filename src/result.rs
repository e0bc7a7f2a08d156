//! Round result types and the running win/loss/push record.

use core::fmt;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player wins even money (dealer busts or player has higher value).
    Win,
    /// Player loses the bet (player busts, dealer higher, or dealer blackjack).
    Lose,
    /// Push (tie, or both hold blackjack).
    Push,
    /// Player has blackjack and the dealer does not; pays 3:2.
    Blackjack,
    /// Player quit the round; no money changes hands.
    Abandoned,
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The bet amount for this round.
    pub bet: usize,
    /// Net bankroll change (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

/// Wins, losses, and pushes over a session.
///
/// Abandoned rounds are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    /// Rounds won, blackjacks included.
    pub wins: usize,
    /// Rounds lost.
    pub losses: usize,
    /// Rounds pushed.
    pub pushes: usize,
}

impl Record {
    /// Counts `outcome` in the record.
    pub const fn tally(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win | RoundOutcome::Blackjack => self.wins += 1,
            RoundOutcome::Lose => self.losses += 1,
            RoundOutcome::Push => self.pushes += 1,
            RoundOutcome::Abandoned => {}
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W:{} L:{} P:{}", self.wins, self.losses, self.pushes)
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            RoundOutcome::Abandoned => write!(f, "Round aborted. No money exchanged."),
            RoundOutcome::Push if self.dealer_blackjack => write!(f, "Both have Blackjack! Push."),
            RoundOutcome::Push => write!(f, "Push. Bet returned."),
            RoundOutcome::Blackjack => write!(f, "Blackjack! You win +{}.", self.net),
            RoundOutcome::Lose if self.dealer_blackjack => {
                write!(f, "Dealer Blackjack. You lose -{}.", self.bet)
            }
            RoundOutcome::Lose => write!(f, "You lose -{}.", self.bet),
            RoundOutcome::Win if self.dealer_bust => {
                write!(f, "Dealer busts. You win +{}.", self.bet)
            }
            RoundOutcome::Win => write!(f, "You win +{}.", self.bet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: RoundOutcome, bet: usize, net: isize) -> RoundResult {
        RoundResult {
            outcome,
            bet,
            net,
            player_value: 20,
            dealer_value: 19,
            player_bust: false,
            dealer_bust: false,
            dealer_blackjack: false,
        }
    }

    #[test]
    fn record_ignores_abandoned_rounds() {
        let mut record = Record::default();
        record.tally(RoundOutcome::Win);
        record.tally(RoundOutcome::Blackjack);
        record.tally(RoundOutcome::Lose);
        record.tally(RoundOutcome::Push);
        record.tally(RoundOutcome::Abandoned);
        assert_eq!(
            record,
            Record {
                wins: 2,
                losses: 1,
                pushes: 1
            }
        );
        assert_eq!(record.to_string(), "W:2 L:1 P:1");
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            result(RoundOutcome::Blackjack, 10, 15).to_string(),
            "Blackjack! You win +15."
        );
        assert_eq!(result(RoundOutcome::Win, 20, 20).to_string(), "You win +20.");
        assert_eq!(result(RoundOutcome::Lose, 20, -20).to_string(), "You lose -20.");
        assert_eq!(result(RoundOutcome::Push, 20, 0).to_string(), "Push. Bet returned.");

        let mut both = result(RoundOutcome::Push, 10, 0);
        both.dealer_blackjack = true;
        assert_eq!(both.to_string(), "Both have Blackjack! Push.");

        let mut bust = result(RoundOutcome::Win, 5, 5);
        bust.dealer_bust = true;
        assert_eq!(bust.to_string(), "Dealer busts. You win +5.");
    }
}
