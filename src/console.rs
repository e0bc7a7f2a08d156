//! Prompt parsing and table rendering for a text console.
//!
//! [`Console`] works over any buffered reader and writer, so sessions can be
//! scripted in tests the same way they run on a terminal.

use std::io::{self, BufRead, Write};

use crate::card::Card;
use crate::error::InputError;
use crate::game::Game;

const RULE: &str = "----------------------------------------";

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Abandon the round without settling it.
    Quit,
}

/// Parses a bet: decimal digits only, at most `bankroll`. `0` means quit.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for a blank line, [`InputError::NotDigits`]
/// for anything but digits, and [`InputError::OutOfRange`] above the bankroll.
pub fn parse_bet(line: &str, bankroll: usize) -> Result<usize, InputError> {
    let line = strip_line_ending(line);
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    if !line.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotDigits);
    }
    // Digits only, so a parse failure is an overflow.
    match line.parse::<usize>() {
        Ok(bet) if bet <= bankroll => Ok(bet),
        _ => Err(InputError::OutOfRange { max: bankroll }),
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

fn first_letter(line: &str) -> Result<char, InputError> {
    strip_line_ending(line)
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .ok_or(InputError::Empty)
}

/// Parses a player action from the first character of the line.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for a blank line and
/// [`InputError::UnknownAction`] unless the line starts with `H`, `S`, or `Q`.
pub fn parse_action(line: &str) -> Result<Action, InputError> {
    match first_letter(line)? {
        'H' => Ok(Action::Hit),
        'S' => Ok(Action::Stand),
        'Q' => Ok(Action::Quit),
        _ => Err(InputError::UnknownAction),
    }
}

/// Parses a yes/no answer from the first character of the line.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for a blank line and
/// [`InputError::UnknownAnswer`] unless the line starts with `Y` or `N`.
pub fn parse_answer(line: &str) -> Result<bool, InputError> {
    match first_letter(line)? {
        'Y' => Ok(true),
        'N' => Ok(false),
        _ => Err(InputError::UnknownAnswer),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

/// Formats a card, in red for hearts and diamonds when `color` is set.
#[must_use]
pub fn format_card(card: &Card, color: bool) -> String {
    if color && card.suit.is_red() {
        colorize(&card.to_string(), "31")
    } else {
        card.to_string()
    }
}

/// A text console reading answers from `input` and printing to `output`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub const fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints one line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn say(&mut self, message: impl core::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Prints the startup banner with the rules and controls.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Terminal Blackjack ===")?;
        writeln!(self.output, "Rules: Dealer hits to 17. Blackjack pays 3:2.")?;
        writeln!(
            self.output,
            "Controls: (H)it, (S)tand, (Q)uit round, ENTER to confirm."
        )?;
        writeln!(self.output)
    }

    /// Prints the dealer and player hands with the bet and bankroll.
    ///
    /// The dealer's hole card and total are shown only when `reveal_dealer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn show_table(&mut self, game: &Game, reveal_dealer: bool) -> io::Result<()> {
        let color = self.color;
        let dealer = game.dealer_hand();
        let player = game.player_hand();

        writeln!(self.output, "\n{RULE}")?;
        write!(
            self.output,
            "Dealer: {}",
            dealer.render_with(!reveal_dealer, |card| format_card(card, color))
        )?;
        if reveal_dealer {
            write!(self.output, " ({})", dealer.value())?;
        }
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Player: {} ({})",
            player.render_with(false, |card| format_card(card, color)),
            player.value()
        )?;
        writeln!(
            self.output,
            "Bet: {} | Bankroll: {}",
            game.current_bet(),
            game.bankroll()
        )?;
        writeln!(self.output, "{RULE}")
    }

    /// Reads one raw line. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 decode to replacement characters, which every
    /// parser rejects, so a garbled line is re-prompted like any other.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Prompts until `parse` accepts a line. `None` at end of input.
    ///
    /// Blank lines re-prompt silently; other rejections print the error first.
    fn prompt<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(InputError::Empty) => {}
                Err(err) => {
                    log::debug!("rejected input {:?}: {err}", line.trim_end());
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Asks for a bet between 0 and `bankroll`. `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn prompt_bet(&mut self, bankroll: usize) -> io::Result<Option<usize>> {
        let prompt = format!("Bankroll: {bankroll} | Enter bet (1..{bankroll}), or 0 to quit: ");
        self.prompt(&prompt, |line| parse_bet(line, bankroll))
    }

    /// Asks for hit, stand, or quit. `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn prompt_action(&mut self) -> io::Result<Option<Action>> {
        self.prompt("(H)it, (S)tand, (Q)uit round: ", parse_action)
    }

    /// Asks whether to play another round. `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn prompt_play_again(&mut self) -> io::Result<Option<bool>> {
        self.prompt("Play another round? (Y/N): ", parse_answer)
    }
}
