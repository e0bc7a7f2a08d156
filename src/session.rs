//! The interactive round loop.

use core::ops::ControlFlow;
use std::io::{BufRead, Write};

use crate::console::{Action, Console};
use crate::error::SessionError;
use crate::game::{Game, GameState};

/// Plays rounds of a [`Game`] over a [`Console`] until the player quits.
///
/// Each round runs betting, the deal, the player turn, the dealer turn, and
/// settlement, then asks whether to play again. End of input at any prompt
/// ends the session as if the player had quit.
#[derive(Debug)]
pub struct Session<R, W> {
    game: Game,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that reads answers from `input` and prints to `output`.
    pub const fn new(game: Game, input: R, output: W) -> Self {
        let color = game.options().color;
        Self {
            game,
            console: Console::new(input, output, color),
        }
    }

    /// Returns the game being played.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the game and the output stream.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.console.into_output())
    }

    /// Runs rounds until the player bets 0, declines another round, or input ends.
    ///
    /// Prints the final record and bankroll before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the console streams fail.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.console.banner()?;

        loop {
            if self.game.replenish() {
                self.console.say(format_args!(
                    "You are out of funds. Resetting bankroll to {}.",
                    self.game.bankroll()
                ))?;
            }

            let bet = match self.console.prompt_bet(self.game.bankroll())? {
                None | Some(0) => break,
                Some(bet) => bet,
            };

            if self.play_round(bet)?.is_break() {
                break;
            }

            if self.console.prompt_play_again()? != Some(true) {
                break;
            }
        }

        let record = self.game.record();
        self.console.say(format_args!(
            "Exiting game. Final record: {record} | Bankroll: {}",
            self.game.bankroll()
        ))?;
        log::info!("session over: {record}, bankroll {}", self.game.bankroll());
        Ok(())
    }

    /// Plays one round for `bet`. Breaks if input ended mid-round.
    fn play_round(&mut self, bet: usize) -> Result<ControlFlow<()>, SessionError> {
        self.game.bet(bet)?;
        let natural = self.game.deal()?;
        self.console.show_table(&self.game, false)?;

        if natural {
            self.console.show_table(&self.game, true)?;
            let result = self.game.showdown()?;
            self.console.say(result)?;
            return Ok(ControlFlow::Continue(()));
        }

        while self.game.state() == GameState::PlayerTurn {
            match self.console.prompt_action()? {
                Some(Action::Hit) => {
                    let card = self.game.hit()?;
                    log::debug!("player hit {card}");
                    self.console.show_table(&self.game, false)?;
                    if self.game.player_hand().is_bust() {
                        self.console.say("You bust.")?;
                    }
                }
                Some(Action::Stand) => self.game.stand()?,
                Some(Action::Quit) => {
                    let result = self.game.quit_round()?;
                    self.console.say(result)?;
                    return Ok(ControlFlow::Continue(()));
                }
                None => {
                    let result = self.game.quit_round()?;
                    self.console.say(result)?;
                    return Ok(ControlFlow::Break(()));
                }
            }
        }

        let player_bust = self.game.player_hand().is_bust();
        if !player_bust {
            self.console.show_table(&self.game, true)?;
        }

        let drawn = self.game.dealer_play()?;
        if !drawn.is_empty() {
            self.console
                .say(format_args!("Dealer draws {} card(s).", drawn.len()))?;
            self.console.show_table(&self.game, true)?;
        }

        let result = self.game.showdown()?;
        self.console.say(result)?;
        Ok(ControlFlow::Continue(()))
    }
}
