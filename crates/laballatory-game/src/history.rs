use std::num::NonZero;

use laballatory_core::{Board, Move};

use crate::undo_redo_stack::UndoRedoStack;

/// One point on a level's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    /// The board at this point.
    pub board: Board,
    /// Number of pours made to reach this point.
    pub moves: usize,
    /// The pour that produced this point, `None` for the starting board.
    pub last_move: Option<Move>,
}

/// Undo/redo timeline of one level.
///
/// The snapshot under the cursor is the current board. Recording a pour
/// discards every redoable snapshot. Undoing restores the board and move count
/// exactly as they were.
#[derive(Debug, Clone)]
pub struct History {
    stack: UndoRedoStack<HistorySnapshot>,
}

impl History {
    /// Starts a timeline at `board` with no moves made.
    ///
    /// With a `limit`, at most that many snapshots (including the current one)
    /// are kept and the oldest are forgotten first.
    #[must_use]
    pub fn new(board: Board, limit: Option<NonZero<usize>>) -> Self {
        let initial = HistorySnapshot {
            board,
            moves: 0,
            last_move: None,
        };
        Self {
            stack: UndoRedoStack::new(initial, limit),
        }
    }

    /// Returns the snapshot limit, `None` if unlimited.
    #[must_use]
    pub fn limit(&self) -> Option<NonZero<usize>> {
        self.stack.limit()
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn current(&self) -> &HistorySnapshot {
        self.stack.current()
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.current().board
    }

    /// Returns the move count of the current snapshot.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.current().moves
    }

    /// Records `board` as the result of `mv` and makes it current.
    pub fn record(&mut self, mv: Move, board: Board) {
        let moves = self.moves() + 1;
        log::trace!("recorded move #{moves}: {mv}");
        self.stack.push(HistorySnapshot {
            board,
            moves,
            last_move: Some(mv),
        });
    }

    /// Steps back one snapshot. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.stack.undo()
    }

    /// Steps forward one snapshot. Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.stack.redo()
    }

    /// Returns `true` if a previous snapshot exists.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    /// Returns `true` if an undone snapshot can be restored.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.stack.can_redo()
    }

    /// Returns how many snapshots can be undone to.
    #[must_use]
    pub fn undo_count(&self) -> usize {
        self.stack.undo_len()
    }

    /// Returns how many snapshots can be redone to.
    #[must_use]
    pub fn redo_count(&self) -> usize {
        self.stack.redo_len()
    }

    /// Returns the undoable snapshots, oldest first.
    pub fn past(&self) -> impl Iterator<Item = &HistorySnapshot> {
        self.stack.past()
    }

    /// Returns the redoable snapshots, next first.
    pub fn future(&self) -> impl Iterator<Item = &HistorySnapshot> {
        self.stack.future()
    }

    /// Returns every snapshot in timeline order.
    pub fn entries(&self) -> impl Iterator<Item = &HistorySnapshot> {
        self.stack.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::parse(2, text).unwrap()
    }

    #[test]
    fn test_record_counts_moves() {
        let start = board("AB|BA||");
        let mut history = History::new(start.clone(), None);
        assert_eq!(history.moves(), 0);
        assert_eq!(history.current().last_move, None);

        let first = start.try_apply_move(0, 2).unwrap();
        history.record(Move::new(0, 2), first.clone());
        let second = first.try_apply_move(1, 3).unwrap();
        history.record(Move::new(1, 3), second.clone());

        assert_eq!(history.moves(), 2);
        assert_eq!(history.board(), &second);
        assert_eq!(history.current().last_move, Some(Move::new(1, 3)));
        assert_eq!(history.undo_count(), 2);
        assert_eq!(history.redo_count(), 0);
    }

    #[test]
    fn test_undo_restores_board_and_moves() {
        let start = board("AB|BA||");
        let next = start.try_apply_move(0, 2).unwrap();
        let mut history = History::new(start.clone(), None);
        history.record(Move::new(0, 2), next.clone());

        assert!(history.undo());
        assert_eq!(history.board(), &start);
        assert_eq!(history.moves(), 0);
        assert_eq!(history.redo_count(), 1);
        assert!(!history.undo());

        assert!(history.redo());
        assert_eq!(history.board(), &next);
        assert_eq!(history.moves(), 1);
        assert!(!history.redo());
    }

    #[test]
    fn test_record_after_undo_drops_future() {
        let start = board("AB|BA||");
        let mut history = History::new(start.clone(), None);
        history.record(Move::new(0, 2), start.try_apply_move(0, 2).unwrap());
        history.undo();

        let other = start.try_apply_move(1, 2).unwrap();
        history.record(Move::new(1, 2), other.clone());

        assert_eq!(history.redo_count(), 0);
        assert_eq!(history.future().count(), 0);
        assert_eq!(history.board(), &other);
        assert_eq!(history.moves(), 1);
    }

    #[test]
    fn test_limit_forgets_oldest() {
        let start = board("AB|BA||");
        let mut history = History::new(start.clone(), NonZero::new(2));
        let first = start.try_apply_move(0, 2).unwrap();
        history.record(Move::new(0, 2), first.clone());
        history.record(Move::new(1, 3), first.try_apply_move(1, 3).unwrap());

        assert_eq!(history.undo_count(), 1);
        assert!(history.undo());
        assert_eq!(history.board(), &first);
        assert_eq!(history.moves(), 1);
        assert!(!history.undo());
    }
}
