//! Terminal blackjack.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::LevelFilter;
use termjack::{DEFAULT_STARTING_BANKROLL, Game, GameOptions, Session};

/// Play blackjack against a dealer who draws to 17.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the deck shuffle (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,
    /// Starting bankroll, also used to refill an empty one.
    #[arg(long, default_value_t = DEFAULT_STARTING_BANKROLL as u64, value_parser = clap::value_parser!(u64).range(1..))]
    bankroll: u64,
    /// Print cards without ANSI colours.
    #[arg(long)]
    no_color: bool,
    /// Log to stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if let Err(err) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {err}");
    }
}

fn main() {
    let args = Args::parse();
    log(args.verbose);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    });
    log::debug!("deck seed {seed}");

    let options = GameOptions::default()
        .with_starting_bankroll(usize::try_from(args.bankroll).unwrap_or(usize::MAX))
        .with_color(!args.no_color);
    let game = Game::new(options, seed);

    let mut session = Session::new(game, io::stdin().lock(), io::stdout().lock());
    if let Err(err) = session.run() {
        log::error!("session ended early: {err}");
    }
}
