use std::mem;

use laballatory_core::Difficulty;

/// A user request forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Intent {
    /// Pick the tier for the next level. Menu only.
    #[display("select {_0} difficulty")]
    SelectDifficulty(Difficulty),
    /// Deal a level at the selected tier. Menu only.
    #[display("start")]
    Start,
    /// Deal a fresh level at the same tier.
    #[display("restart")]
    Restart,
    /// Abandon the level and return to the menu.
    #[display("return to menu")]
    ToMainMenu,
    /// Click the tube at this index.
    #[display("click tube {_0}")]
    TubeClicked(usize),
    /// Step back one pour.
    #[display("undo")]
    Undo,
    /// Step forward one pour.
    #[display("redo")]
    Redo,
}

/// Intents collected during one input pass, dispatched together.
#[derive(Debug, Default)]
pub struct IntentQueue {
    intents: Vec<Intent>,
}

impl IntentQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an intent.
    pub fn request(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Removes and returns every queued intent in request order.
    pub fn take_all(&mut self) -> Vec<Intent> {
        mem::take(&mut self.intents)
    }
}

impl Extend<Intent> for IntentQueue {
    fn extend<T: IntoIterator<Item = Intent>>(&mut self, iter: T) {
        self.intents.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_all_returns_intents_and_clears_queue() {
        let mut queue = IntentQueue::new();
        queue.request(Intent::Start);
        queue.request(Intent::TubeClicked(2));

        let drained = queue.take_all();
        assert_eq!(drained, [Intent::Start, Intent::TubeClicked(2)]);
        assert!(queue.is_empty());
        assert!(queue.take_all().is_empty());
    }

    #[test]
    fn test_intents_describe_themselves() {
        assert_eq!(
            Intent::SelectDifficulty(Difficulty::Hard).to_string(),
            "select hard difficulty"
        );
        assert_eq!(Intent::TubeClicked(3).to_string(), "click tube 3");
    }
}
