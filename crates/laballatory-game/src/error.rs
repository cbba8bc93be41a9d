use laballatory_core::MoveError;

use crate::{Intent, Mode};

/// Errors returned when an intent cannot be carried out.
///
/// None of these are fatal: the session is left exactly as it was, except
/// that a refused pour may re-arm the clicked tube.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The clicked tube cannot be armed or poured onto.
    #[display("illegal move: {_0}")]
    #[from]
    IllegalMove(MoveError),
    /// Undo or redo was requested with nothing to restore.
    #[display("no history entry to restore")]
    EmptyHistory,
    /// The intent is not accepted in the current mode.
    #[display("cannot {intent} while in {mode} mode")]
    InvalidModeTransition {
        /// The mode the session was in.
        mode: Mode,
        /// The refused intent.
        intent: Intent,
    },
}
