//! Text-mode front end for the Laballatory ball-sort puzzle.
//!
//! Reads commands line by line, forwards them to a [`Session`] as intents,
//! and prints the resulting read model after every line.

use std::io::{self, BufRead, Write};

use laballatory_core::{Board, BoardError, ParseBoardError};
use laballatory_game::{IntentQueue, Session};

pub use self::{
    command::{Command, HELP, ParseCommandError, parse_line},
    render::Screen,
};

pub mod command;
pub mod render;

/// Errors that end the program.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// Reading commands or writing the screen failed.
    #[display("I/O error: {_0}")]
    Io(io::Error),
    /// The board given on the command line cannot be parsed.
    #[display("invalid board: {_0}")]
    Board(ParseBoardError),
    /// The board given on the command line does not fill one tube per color.
    #[display("unplayable board: {_0}")]
    UnplayableBoard(BoardError),
}

/// Parses a hand-made board and loads it into `session`.
///
/// Every color on the board must fill exactly one tube, otherwise the level
/// could never be won.
///
/// # Errors
///
/// Returns [`AppError::Board`] if `text` does not parse and
/// [`AppError::UnplayableBoard`] if a color count is off.
pub fn load_board(session: &mut Session, capacity: usize, text: &str) -> Result<(), AppError> {
    let board = Board::parse(capacity, text)?;
    board.validate_color_counts()?;
    session.play_board(board);
    Ok(())
}

/// Runs the command loop until `quit` or end of input.
///
/// # Errors
///
/// Returns an I/O error if reading `input` or writing `output` fails.
pub fn run<R, W>(session: &mut Session, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut queue = IntentQueue::new();
    write!(output, "{}", Screen(&session.view()))?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        let commands = match parse_line(&line) {
            Ok(commands) => commands,
            Err(err) => {
                writeln!(output, "{err}")?;
                prompt(&mut output)?;
                continue;
            }
        };

        let mut quit = false;
        for command in commands {
            match command {
                Command::Intent(intent) => queue.request(intent),
                Command::Help => writeln!(output, "{HELP}")?,
                Command::Quit => {
                    quit = true;
                    break;
                }
            }
        }
        if !queue.is_empty() {
            session.dispatch_all(&mut queue);
            write!(output, "{}", Screen(&session.view()))?;
        }
        if quit {
            log::debug!("quit requested");
            return Ok(());
        }
        prompt(&mut output)?;
    }
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
