use std::num::NonZero;

use laballatory_core::Difficulty;

/// Player-facing options that outlive a single level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Tier used by the next start or restart.
    pub difficulty: Difficulty,
    /// Maximum number of history snapshots per level, `None` for unlimited.
    pub history_limit: Option<NonZero<usize>>,
}

impl SessionSettings {
    /// Sets the difficulty.
    #[must_use]
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the history limit.
    #[must_use]
    pub fn history_limit(mut self, limit: Option<NonZero<usize>>) -> Self {
        self.history_limit = limit;
        self
    }
}
