//! Parsing typed commands into intents.

use laballatory_core::Difficulty;
use laballatory_game::Intent;

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  easy | medium | hard   choose difficulty (menu)
  start                  deal a level (menu)
  <n> ...                click tube n, counting from 1
  u, undo / r, redo      step through history
  restart                deal a fresh level
  menu                   back to the menu
  ?, help                show this text
  q, quit                leave";

/// One word typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the session.
    Intent(Intent),
    /// Print the command list.
    Help,
    /// Leave the program.
    Quit,
}

/// Errors from [`parse_line`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    /// The word is not a command.
    #[display("unknown command {word:?} (type ? for help)")]
    UnknownCommand {
        /// The unrecognized word.
        word: String,
    },
    /// Tubes are numbered from 1.
    #[display("tubes are numbered from 1")]
    ZeroTube,
}

/// Parses a line of whitespace-separated commands.
///
/// Tube numbers are 1-based on input and converted to 0-based indices.
///
/// # Errors
///
/// Returns a [`ParseCommandError`] for the first word that is not a command;
/// nothing from the line is returned in that case.
pub fn parse_line(line: &str) -> Result<Vec<Command>, ParseCommandError> {
    line.split_whitespace().map(parse_word).collect()
}

fn parse_word(word: &str) -> Result<Command, ParseCommandError> {
    if let Ok(number) = word.parse::<usize>() {
        let index = number.checked_sub(1).ok_or(ParseCommandError::ZeroTube)?;
        return Ok(Command::Intent(Intent::TubeClicked(index)));
    }
    if let Ok(difficulty) = word.parse::<Difficulty>() {
        return Ok(Command::Intent(Intent::SelectDifficulty(difficulty)));
    }
    let command = match word.to_ascii_lowercase().as_str() {
        "start" | "s" => Command::Intent(Intent::Start),
        "restart" | "new" => Command::Intent(Intent::Restart),
        "menu" | "m" => Command::Intent(Intent::ToMainMenu),
        "undo" | "u" => Command::Intent(Intent::Undo),
        "redo" | "r" => Command::Intent(Intent::Redo),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => {
            return Err(ParseCommandError::UnknownCommand {
                word: word.to_owned(),
            });
        }
    };
    Ok(command)
}
