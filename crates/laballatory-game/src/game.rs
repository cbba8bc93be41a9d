use std::num::NonZero;

use laballatory_core::Board;
use laballatory_generator::{GeneratedLevel, LevelSeed};

use crate::{GameError, History, Selection, Transition};

/// One level in progress.
///
/// Owns the level's [`History`] (and with it the current board and move
/// count) and the tube [`Selection`]. The selection is cleared whenever the
/// board is replaced by undo or redo.
///
/// # Example
///
/// ```
/// use laballatory_core::Board;
/// use laballatory_game::{Game, Transition};
///
/// let mut game = Game::from_board(Board::parse(4, "A|AAA").unwrap(), None);
/// game.click_tube(0).unwrap();
/// assert!(matches!(game.click_tube(1), Ok(Transition::Pour(_))));
/// assert!(game.is_won());
/// assert_eq!(game.moves(), 1);
///
/// game.undo().unwrap();
/// assert!(!game.is_won());
/// assert_eq!(game.moves(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    history: History,
    selection: Selection,
    seed: Option<LevelSeed>,
}

impl Game {
    /// Starts a generated level.
    #[must_use]
    pub fn new(level: GeneratedLevel, history_limit: Option<NonZero<usize>>) -> Self {
        Self {
            seed: Some(level.seed),
            ..Self::from_board(level.board, history_limit)
        }
    }

    /// Starts a level from a given board, with no seed attached.
    #[must_use]
    pub fn from_board(board: Board, history_limit: Option<NonZero<usize>>) -> Self {
        Self {
            history: History::new(board, history_limit),
            selection: Selection::Idle,
            seed: None,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.history.board()
    }

    /// Returns the number of pours made to reach the current board.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.history.moves()
    }

    /// Returns the tube selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the seed the level was generated from.
    #[must_use]
    pub fn seed(&self) -> Option<LevelSeed> {
        self.seed
    }

    /// Returns the undo/redo timeline.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns `true` if the current board is solved.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board().is_won()
    }

    /// Handles a click on tube `index`.
    ///
    /// A legal pour is applied and recorded in the history. See
    /// [`Selection::click`] for how the selection moves.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the click is refused outright; the
    /// selection is left unchanged in that case.
    pub fn click_tube(&mut self, index: usize) -> Result<Transition, GameError> {
        let transition = self.selection.click(self.board(), index);
        match transition {
            Transition::Stay(err) => return Err(err.into()),
            Transition::Pour(mv) => {
                let board = self.board().try_apply_move(mv.from, mv.to)?;
                self.history.record(mv, board);
            }
            Transition::Rearm { tube, rejected } => {
                log::debug!("refused pour onto tube {tube} ({rejected}), re-arming it");
            }
            Transition::Arm(_) | Transition::Disarm => {}
        }
        let selection = transition.next_selection(self.selection);
        if selection != self.selection {
            log::debug!("selection: {:?} -> {selection:?}", self.selection);
            self.selection = selection;
        }
        Ok(transition)
    }

    /// Restores the previous board and move count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyHistory`] if there is nothing to undo.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if !self.history.undo() {
            return Err(GameError::EmptyHistory);
        }
        self.selection = Selection::Idle;
        Ok(())
    }

    /// Re-applies the most recently undone board and move count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyHistory`] if there is nothing to redo.
    pub fn redo(&mut self) -> Result<(), GameError> {
        if !self.history.redo() {
            return Err(GameError::EmptyHistory);
        }
        self.selection = Selection::Idle;
        Ok(())
    }
}
