use laballatory_core::{Board, Move, MoveError};

/// Which tube, if any, is armed as the source of the next pour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Selection {
    /// No tube is armed.
    #[default]
    Idle,
    /// The tube at this index is armed.
    Armed(usize),
}

/// What a tube click does, as decided by [`Selection::click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Arm the clicked tube.
    Arm(usize),
    /// The armed tube was clicked again; disarm it.
    Disarm,
    /// Pour from the armed tube onto the clicked one, then disarm.
    Pour(Move),
    /// The pour is illegal but the clicked tube has balls; arm it instead.
    Rearm {
        /// The newly armed tube.
        tube: usize,
        /// Why the pour onto it was refused.
        rejected: MoveError,
    },
    /// The click is refused and the selection stays as it was.
    Stay(MoveError),
}

impl Selection {
    /// Returns the armed tube index.
    #[must_use]
    pub fn armed(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Armed(index) => Some(index),
        }
    }

    /// Decides what clicking tube `index` on `board` does.
    ///
    /// While idle, a non-empty tube is armed and an empty one is refused.
    /// While armed, clicking the armed tube disarms it and clicking another
    /// tube pours when legal. An illegal pour re-arms the clicked tube if it
    /// has balls and is refused otherwise.
    #[must_use]
    pub fn click(self, board: &Board, index: usize) -> Transition {
        match self {
            Self::Idle => match board.tube(index) {
                None => Transition::Stay(MoveError::TubeOutOfRange {
                    index,
                    tube_count: board.tube_count(),
                }),
                Some(tube) if tube.is_empty() => Transition::Stay(MoveError::SourceEmpty { index }),
                Some(_) => Transition::Arm(index),
            },
            Self::Armed(from) if from == index => Transition::Disarm,
            Self::Armed(from) => match board.check_move(from, index) {
                Ok(_) => Transition::Pour(Move::new(from, index)),
                Err(rejected) => match board.tube(index) {
                    Some(tube) if !tube.is_empty() => Transition::Rearm {
                        tube: index,
                        rejected,
                    },
                    _ => Transition::Stay(rejected),
                },
            },
        }
    }
}

impl Transition {
    /// Returns the selection after this transition is applied to `current`.
    #[must_use]
    pub fn next_selection(self, current: Selection) -> Selection {
        match self {
            Self::Arm(index) | Self::Rearm { tube: index, .. } => Selection::Armed(index),
            Self::Disarm | Self::Pour(_) => Selection::Idle,
            Self::Stay(_) => current,
        }
    }
}
