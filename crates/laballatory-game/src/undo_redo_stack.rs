use std::{
    collections::{VecDeque, vec_deque},
    num::NonZero,
};

/// A linear timeline with a cursor: entries before the cursor are the past,
/// entries after it the future.
///
/// The stack is never empty; the entry under the cursor is the present.
/// With a limit, the oldest entries are dropped once the timeline grows
/// beyond it.
#[derive(Debug, Clone)]
pub(crate) struct UndoRedoStack<T> {
    stack: VecDeque<T>,
    limit: Option<NonZero<usize>>,
    cursor: usize,
}

impl<T> UndoRedoStack<T> {
    #[must_use]
    pub(crate) fn new(initial: T, limit: Option<NonZero<usize>>) -> Self {
        Self {
            stack: VecDeque::from([initial]),
            limit,
            cursor: 0,
        }
    }

    #[must_use]
    pub(crate) fn limit(&self) -> Option<NonZero<usize>> {
        self.limit
    }

    #[must_use]
    pub(crate) fn entries(&self) -> vec_deque::Iter<'_, T> {
        self.stack.iter()
    }

    /// Entries that can be undone to, oldest first.
    #[must_use]
    pub(crate) fn past(&self) -> vec_deque::Iter<'_, T> {
        self.stack.range(..self.cursor)
    }

    /// Entries that can be redone to, next first.
    #[must_use]
    pub(crate) fn future(&self) -> vec_deque::Iter<'_, T> {
        self.stack.range(self.cursor + 1..)
    }

    /// Makes `item` the present, discarding the future.
    pub(crate) fn push(&mut self, item: T) {
        self.stack.truncate(self.cursor + 1);

        if let Some(limit) = self.limit
            && self.stack.len() >= limit.get()
        {
            self.stack.pop_front();
        }

        self.stack.push_back(item);
        self.cursor = self.stack.len() - 1;
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub(crate) fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }

    pub(crate) fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub(crate) fn undo_len(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub(crate) fn redo_len(&self) -> usize {
        self.stack.len() - self.cursor - 1
    }

    #[must_use]
    pub(crate) fn current(&self) -> &T {
        &self.stack[self.cursor]
    }
}
