//! Boards, moves, and the pouring rules.

use std::{
    fmt::{self, Display},
    sync::Arc,
};

use crate::{Color, Tube};

/// A pour from one tube onto another, by tube index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{from} -> {to}")]
pub struct Move {
    /// Index of the tube the balls are taken from.
    pub from: usize,
    /// Index of the tube the balls are poured onto.
    pub to: usize,
}

impl Move {
    /// Creates a move from `from` to `to`.
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Why a pour is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Source and destination are the same tube.
    #[display("cannot pour tube {index} onto itself")]
    SameTube {
        /// The tube index.
        index: usize,
    },
    /// A tube index does not exist on the board.
    #[display("tube {index} is out of range (board has {tube_count} tubes)")]
    TubeOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of tubes on the board.
        tube_count: usize,
    },
    /// The source tube has nothing to pour.
    #[display("tube {index} is empty")]
    SourceEmpty {
        /// The source tube index.
        index: usize,
    },
    /// The destination tube has no free slot.
    #[display("tube {index} is full")]
    DestinationFull {
        /// The destination tube index.
        index: usize,
    },
    /// The destination's top ball differs from the poured color.
    #[display("cannot pour {poured} onto {top}")]
    ColorMismatch {
        /// Color of the run being poured.
        poured: Color,
        /// Color on top of the destination.
        top: Color,
    },
}

/// Errors raised when a board violates its structural invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Tubes must have room for at least one ball.
    #[display("tube capacity must be at least 1")]
    ZeroCapacity,
    /// A board needs at least one tube.
    #[display("board has no tubes")]
    NoTubes,
    /// A tube holds more balls than the capacity.
    #[display("tube {index} holds {len} balls, capacity is {capacity}")]
    TubeOverflow {
        /// The tube index.
        index: usize,
        /// Number of balls found.
        len: usize,
        /// The board capacity.
        capacity: usize,
    },
    /// A color does not fill exactly one tube's worth of balls.
    #[display("color {color} appears {count} times, expected {capacity}")]
    ColorCount {
        /// The color with the wrong count.
        color: Color,
        /// Number of balls of that color.
        count: usize,
        /// The board capacity.
        capacity: usize,
    },
}

/// Errors from [`Board::parse`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseBoardError {
    /// A character is neither a palette letter nor a tube separator.
    #[display("invalid ball character {_0:?}")]
    #[from(skip)]
    InvalidBall(#[error(not(source))] char),
    /// The parsed tubes do not form a valid board.
    #[display("{_0}")]
    Board(BoardError),
}

/// A ball-sort board: a fixed sequence of tubes sharing one capacity.
///
/// Boards are immutable. Pouring with [`Board::try_apply_move`] returns a new
/// board and leaves the original untouched. Cloning is cheap because the tubes
/// are shared behind an [`Arc`], so history entries can hold boards by value.
///
/// The text form lists each tube's balls bottom to top as palette letters,
/// with tubes separated by `|`.
///
/// # Examples
///
/// ```
/// use laballatory_core::Board;
///
/// let board = Board::parse(4, "AA|B||").unwrap();
/// assert!(board.is_legal_move(0, 2));
///
/// let next = board.try_apply_move(0, 2).unwrap();
/// assert_eq!(next.to_string(), "|B|AA|");
/// assert_eq!(board.to_string(), "AA|B||");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    tubes: Arc<[Tube]>,
    capacity: usize,
}

impl Board {
    /// Creates a board from tubes listed bottom to top.
    ///
    /// Only the per-tube capacity bound is checked here; use
    /// [`Board::validate_color_counts`] to also require that every color fills
    /// exactly one tube.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroCapacity`], [`BoardError::NoTubes`], or
    /// [`BoardError::TubeOverflow`] if the layout is not a valid board.
    pub fn from_tubes<T, I>(capacity: usize, tubes: T) -> Result<Self, BoardError>
    where
        T: IntoIterator<Item = I>,
        I: IntoIterator<Item = Color>,
    {
        if capacity == 0 {
            return Err(BoardError::ZeroCapacity);
        }
        let tubes = tubes
            .into_iter()
            .enumerate()
            .map(|(index, balls)| {
                let balls = balls.into_iter().collect::<Vec<_>>();
                let len = balls.len();
                Tube::from_balls(capacity, balls).ok_or(BoardError::TubeOverflow {
                    index,
                    len,
                    capacity,
                })
            })
            .collect::<Result<Arc<[Tube]>, _>>()?;
        if tubes.is_empty() {
            return Err(BoardError::NoTubes);
        }
        Ok(Self { tubes, capacity })
    }

    /// Parses the text form, e.g. `"AB|BA||"`.
    ///
    /// Whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError::InvalidBall`] for characters outside the
    /// palette, or [`ParseBoardError::Board`] if the tubes do not fit `capacity`.
    pub fn parse(capacity: usize, text: &str) -> Result<Self, ParseBoardError> {
        let tubes = text
            .split('|')
            .map(|tube| {
                tube.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| Color::from_letter(ch).ok_or(ParseBoardError::InvalidBall(ch)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_tubes(capacity, tubes)?)
    }

    /// Checks that every color present fills exactly one tube's worth of balls.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ColorCount`] for the first color whose count
    /// differs from the capacity.
    pub fn validate_color_counts(&self) -> Result<(), BoardError> {
        let counts = self.color_counts();
        for color in Color::ALL {
            let count = counts[usize::from(color.index())];
            if count != 0 && count != self.capacity {
                return Err(BoardError::ColorCount {
                    color,
                    count,
                    capacity: self.capacity,
                });
            }
        }
        Ok(())
    }

    /// Returns the shared tube capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of tubes.
    #[must_use]
    pub fn tube_count(&self) -> usize {
        self.tubes.len()
    }

    /// Returns all tubes in board order.
    #[must_use]
    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    /// Returns the tube at `index`, if it exists.
    #[must_use]
    pub fn tube(&self, index: usize) -> Option<&Tube> {
        self.tubes.get(index)
    }

    /// Returns the number of balls of each palette color, indexed by palette index.
    #[must_use]
    pub fn color_counts(&self) -> [usize; Color::PALETTE_LEN] {
        let mut counts = [0; Color::PALETTE_LEN];
        for color in self.tubes.iter().flat_map(Tube::balls) {
            counts[usize::from(color.index())] += 1;
        }
        counts
    }

    /// Returns the total number of balls on the board.
    #[must_use]
    pub fn ball_count(&self) -> usize {
        self.tubes.iter().map(Tube::len).sum()
    }

    fn tube_checked(&self, index: usize) -> Result<&Tube, MoveError> {
        self.tubes.get(index).ok_or(MoveError::TubeOutOfRange {
            index,
            tube_count: self.tubes.len(),
        })
    }

    /// Checks a pour and returns how many balls it would transfer.
    ///
    /// The amount is the top run of `from`, capped by the free space of `to`.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] describing the first rule the pour breaks.
    pub fn check_move(&self, from: usize, to: usize) -> Result<usize, MoveError> {
        let source = self.tube_checked(from)?;
        let target = self.tube_checked(to)?;
        if from == to {
            return Err(MoveError::SameTube { index: from });
        }
        let Some(poured) = source.top() else {
            return Err(MoveError::SourceEmpty { index: from });
        };
        if target.is_full() {
            return Err(MoveError::DestinationFull { index: to });
        }
        if let Some(top) = target.top()
            && top != poured
        {
            return Err(MoveError::ColorMismatch { poured, top });
        }
        Ok(source.top_run().min(target.free_space()))
    }

    /// Returns `true` if pouring `from` onto `to` is allowed.
    #[must_use]
    pub fn is_legal_move(&self, from: usize, to: usize) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Pours the top run of `from` onto `to` and returns the resulting board.
    ///
    /// Only as many balls as fit in `to` are moved; the rest of the run stays
    /// behind.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from [`Board::check_move`] if the pour is illegal.
    pub fn try_apply_move(&self, from: usize, to: usize) -> Result<Self, MoveError> {
        let amount = self.check_move(from, to)?;
        let mut tubes = self.tubes.to_vec();
        let run = tubes[from].take_top(amount);
        tubes[to].put_top(&run);
        Ok(Self {
            tubes: tubes.into(),
            capacity: self.capacity,
        })
    }

    /// Pours a move already known to be legal.
    ///
    /// # Panics
    ///
    /// Panics if the move is illegal; check it with [`Board::is_legal_move`] first.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Self {
        match self.try_apply_move(mv.from, mv.to) {
            Ok(board) => board,
            Err(err) => panic!("illegal move {mv}: {err}"),
        }
    }

    /// Returns every legal move on this board, in source-then-destination order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        let count = self.tubes.len();
        (0..count)
            .flat_map(move |from| (0..count).map(move |to| Move::new(from, to)))
            .filter(|mv| self.is_legal_move(mv.from, mv.to))
    }

    /// Returns `true` if every tube is empty or complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.tubes.iter().all(Tube::is_settled)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tube) in self.tubes.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            for color in tube.balls() {
                Display::fmt(color, f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const A: Color = Color::from_index(0);
    const B: Color = Color::from_index(1);

    fn board(capacity: usize, text: &str) -> Board {
        Board::parse(capacity, text).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let b = board(4, "AB | BA || ");
        assert_eq!(b.tube_count(), 4);
        assert_eq!(b.tube(0).unwrap().balls(), &[A, B]);
        assert_eq!(b.to_string(), "AB|BA||");

        assert_eq!(Board::parse(4, "A?|"), Err(ParseBoardError::InvalidBall('?')));
        assert_eq!(
            Board::parse(2, "AAA|"),
            Err(ParseBoardError::Board(BoardError::TubeOverflow {
                index: 0,
                len: 3,
                capacity: 2,
            }))
        );
        assert_eq!(Board::parse(0, "|"), Err(BoardError::ZeroCapacity.into()));
        assert_eq!(
            Board::from_tubes(4, Vec::<Vec<Color>>::new()),
            Err(BoardError::NoTubes)
        );
    }

    #[test]
    fn test_validate_color_counts() {
        assert!(board(2, "AB|BA|").validate_color_counts().is_ok());
        assert_eq!(
            board(2, "AB|B|").validate_color_counts(),
            Err(BoardError::ColorCount {
                color: A,
                count: 1,
                capacity: 2,
            })
        );
    }

    #[test]
    fn test_check_move_rules() {
        let b = board(4, "AA|B||BBBB");
        assert_eq!(b.check_move(0, 2), Ok(2));
        assert_eq!(b.check_move(1, 2), Ok(1));
        assert_eq!(b.check_move(0, 0), Err(MoveError::SameTube { index: 0 }));
        assert_eq!(b.check_move(2, 0), Err(MoveError::SourceEmpty { index: 2 }));
        assert_eq!(b.check_move(1, 3), Err(MoveError::DestinationFull { index: 3 }));
        assert_eq!(
            b.check_move(0, 1),
            Err(MoveError::ColorMismatch { poured: A, top: B })
        );
        assert_eq!(
            b.check_move(0, 9),
            Err(MoveError::TubeOutOfRange {
                index: 9,
                tube_count: 4,
            })
        );
        assert!(!b.is_legal_move(9, 0));
    }

    #[test]
    fn test_pour_is_capped_by_free_space() {
        let b = board(4, "BAAA|BBA");
        assert_eq!(b.check_move(0, 1), Ok(1));
        let next = b.try_apply_move(0, 1).unwrap();
        assert_eq!(next.to_string(), "BAA|BBAA");
    }

    #[test]
    fn test_pour_moves_whole_run_onto_empty() {
        let b = board(4, "AA|B||");
        let next = b.apply_move(Move::new(0, 2));
        assert_eq!(next.to_string(), "|B|AA|");
        assert_eq!(b.to_string(), "AA|B||");
    }

    #[test]
    fn test_consolidating_single_color_wins() {
        let b = board(4, "A|AAA");
        assert!(!b.is_won());
        let next = b.try_apply_move(0, 1).unwrap();
        assert_eq!(next.to_string(), "|AAAA");
        assert!(next.tube(1).unwrap().is_complete());
        assert!(next.is_won());
    }

    #[test]
    fn test_is_won() {
        assert!(board(2, "AA|BB||").is_won());
        assert!(!board(2, "AB|BA||").is_won());
        assert!(!board(2, "A|A|BB").is_won());
        assert!(board(2, "||").is_won());
    }

    #[test]
    fn test_legal_moves() {
        let b = board(2, "AB|B|");
        let moves = b.legal_moves().collect::<Vec<_>>();
        assert_eq!(
            moves,
            [Move::new(0, 1), Move::new(0, 2), Move::new(1, 2)]
        );
    }

    #[test]
    #[should_panic(expected = "illegal move 0 -> 0")]
    fn test_apply_illegal_move_panics() {
        let _ = board(4, "A|").apply_move(Move::new(0, 0));
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        (2usize..=6, 1usize..=3, 1usize..=5)
            .prop_flat_map(|(colors, spare, capacity)| {
                let balls = (0..colors)
                    .flat_map(|c| {
                        let color = Color::from_index(u8::try_from(c).unwrap());
                        std::iter::repeat_n(color, capacity)
                    })
                    .collect::<Vec<_>>();
                (
                    Just(balls).prop_shuffle(),
                    Just(colors),
                    Just(spare),
                    Just(capacity),
                )
            })
            .prop_map(|(balls, colors, spare, capacity)| {
                let mut tubes = balls
                    .chunks(capacity)
                    .map(<[Color]>::to_vec)
                    .collect::<Vec<_>>();
                tubes.extend(std::iter::repeat_n(Vec::new(), spare));
                assert_eq!(tubes.len(), colors + spare);
                Board::from_tubes(capacity, tubes).unwrap()
            })
    }

    proptest! {
        #[test]
        fn prop_pours_conserve_balls_and_capacity(
            board in arb_board(),
            moves in prop::collection::vec((0usize..9, 0usize..9), 0..64),
        ) {
            let counts = board.color_counts();
            let mut current = board;
            for (from, to) in moves {
                match current.try_apply_move(from, to) {
                    Ok(next) => {
                        prop_assert!(current.is_legal_move(from, to));
                        prop_assert_eq!(next.ball_count(), current.ball_count());
                        current = next;
                    }
                    Err(_) => prop_assert!(!current.is_legal_move(from, to)),
                }
                prop_assert_eq!(current.color_counts(), counts);
                prop_assert!(current.tubes().iter().all(|t| t.len() <= t.capacity()));
                prop_assert!(current.validate_color_counts().is_ok());
            }
        }

        #[test]
        fn prop_is_won_matches_definition(board in arb_board()) {
            let expected = board
                .tubes()
                .iter()
                .all(|t| t.is_empty() || (t.is_full() && t.balls().iter().all(|&c| Some(c) == t.top())));
            prop_assert_eq!(board.is_won(), expected);
        }
    }
}
