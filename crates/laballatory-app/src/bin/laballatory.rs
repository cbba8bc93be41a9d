//! Laballatory in the terminal.
//!
//! Set `RUST_LOG=debug` to see refused intents and level seeds.

use std::{io, num::NonZero};

use clap::Parser;
use laballatory_app::AppError;
use laballatory_core::Difficulty;
use laballatory_game::{Intent, Session, SessionSettings};
use laballatory_generator::LevelSeed;

/// Sort the colored balls so every tube holds a single color.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Difficulty selected on the menu.
    #[arg(long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,
    /// Master seed (64 hex digits) to replay a session's levels.
    #[arg(long)]
    seed: Option<LevelSeed>,
    /// Maximum number of history snapshots kept per level.
    #[arg(long)]
    history_limit: Option<NonZero<usize>>,
    /// Start straight into a hand-made board, e.g. "AB|BA||".
    #[arg(long)]
    board: Option<String>,
    /// Tube capacity for --board.
    #[arg(long, default_value_t = 4)]
    capacity: usize,
    /// Skip the menu and deal a level right away.
    #[arg(long)]
    start: bool,
}

fn main() -> Result<(), AppError> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let settings = SessionSettings::default()
        .difficulty(args.difficulty)
        .history_limit(args.history_limit);
    let mut session = match args.seed {
        Some(seed) => Session::with_seed(settings, seed),
        None => Session::with_settings(settings),
    };
    log::debug!("master seed: {}", session.master_seed());

    if let Some(text) = &args.board {
        laballatory_app::load_board(&mut session, args.capacity, text)?;
    } else if args.start {
        session.dispatch(Intent::Start);
    }

    laballatory_app::run(&mut session, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
