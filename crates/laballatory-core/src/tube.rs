//! Capacity-bounded stacks of balls.

use tinyvec::TinyVec;

use crate::Color;

/// Inline storage covers the usual four-slot tubes without allocating.
type Balls = TinyVec<[Color; 4]>;

/// A tube: an ordered stack of balls, bottom to top, bounded by a capacity.
///
/// A tube never holds more than [`capacity`](Self::capacity) balls. Tubes are
/// values; pouring produces new tubes through [`Board`](crate::Board) rather
/// than mutating tubes shared with earlier boards.
///
/// # Examples
///
/// ```
/// use laballatory_core::{Color, Tube};
///
/// let [a, b, ..] = Color::ALL;
/// let tube = Tube::from_balls(4, [b, a, a]).unwrap();
/// assert_eq!(tube.top(), Some(a));
/// assert_eq!(tube.top_run(), 2);
/// assert_eq!(tube.free_space(), 1);
/// assert!(!tube.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tube {
    balls: Balls,
    capacity: usize,
}

impl Tube {
    /// Creates an empty tube.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            balls: Balls::new(),
            capacity,
        }
    }

    /// Creates a tube holding `balls`, listed bottom to top.
    ///
    /// Returns `None` if there are more balls than `capacity`.
    #[must_use]
    pub fn from_balls<I>(capacity: usize, balls: I) -> Option<Self>
    where
        I: IntoIterator<Item = Color>,
    {
        let balls = balls.into_iter().collect::<Balls>();
        (balls.len() <= capacity).then_some(Self { balls, capacity })
    }

    /// Returns the maximum number of balls this tube can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the balls, bottom to top.
    #[must_use]
    pub fn balls(&self) -> &[Color] {
        &self.balls
    }

    /// Returns the number of balls in the tube.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    /// Returns `true` if the tube holds no balls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Returns `true` if the tube holds `capacity` balls.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.balls.len() >= self.capacity
    }

    /// Returns the number of balls that can still be added.
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.capacity.saturating_sub(self.balls.len())
    }

    /// Returns the topmost ball, if any.
    #[must_use]
    pub fn top(&self) -> Option<Color> {
        self.balls.last().copied()
    }

    /// Returns the ball a front end shows hovering above this tube.
    ///
    /// This is the topmost color, if any. It has no bearing on move legality.
    #[must_use]
    pub fn over_color(&self) -> Option<Color> {
        self.top()
    }

    /// Returns the length of the maximal run of equal colors at the top.
    #[must_use]
    pub fn top_run(&self) -> usize {
        let Some(top) = self.top() else {
            return 0;
        };
        self.balls
            .iter()
            .rev()
            .take_while(|&&color| color == top)
            .count()
    }

    /// Returns `true` if the tube is full and every ball shares one color.
    ///
    /// An empty tube is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_full() && self.top_run() == self.balls.len()
    }

    /// Returns `true` if the tube is empty or complete, i.e. needs no more work.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.is_empty() || self.is_complete()
    }

    /// Removes the top `count` balls and returns them bottom to top.
    pub(crate) fn take_top(&mut self, count: usize) -> Balls {
        let at = self.balls.len() - count;
        self.balls.drain(at..).collect()
    }

    /// Pushes `balls` on top, preserving their order.
    pub(crate) fn put_top(&mut self, balls: &[Color]) {
        debug_assert!(balls.len() <= self.free_space());
        self.balls.extend_from_slice(balls);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::from_index(0);
    const B: Color = Color::from_index(1);

    #[test]
    fn test_top_run_counts_only_matching_tail() {
        assert_eq!(Tube::new(4).top_run(), 0);
        assert_eq!(Tube::from_balls(4, [A]).unwrap().top_run(), 1);
        assert_eq!(Tube::from_balls(4, [A, B, B]).unwrap().top_run(), 2);
        assert_eq!(Tube::from_balls(4, [B, A, B]).unwrap().top_run(), 1);
        assert_eq!(Tube::from_balls(4, [A, A, A, A]).unwrap().top_run(), 4);
    }

    #[test]
    fn test_complete_requires_full_uniform_tube() {
        assert!(!Tube::new(4).is_complete());
        assert!(!Tube::from_balls(4, [A, A, A]).unwrap().is_complete());
        assert!(!Tube::from_balls(4, [B, A, A, A]).unwrap().is_complete());
        assert!(Tube::from_balls(4, [A, A, A, A]).unwrap().is_complete());

        assert!(Tube::new(4).is_settled());
        assert!(!Tube::from_balls(4, [A]).unwrap().is_settled());
    }

    #[test]
    fn test_from_balls_rejects_overflow() {
        assert!(Tube::from_balls(2, [A, A, A]).is_none());
        let tube = Tube::from_balls(2, [A, B]).unwrap();
        assert!(tube.is_full());
        assert_eq!(tube.free_space(), 0);
    }

    #[test]
    fn test_over_color_is_top() {
        assert_eq!(Tube::new(4).over_color(), None);
        assert_eq!(Tube::from_balls(4, [A, B]).unwrap().over_color(), Some(B));
    }

    #[test]
    fn test_take_and_put_preserve_order() {
        let mut source = Tube::from_balls(4, [B, A, A]).unwrap();
        let mut target = Tube::new(4);
        let run = source.take_top(2);
        target.put_top(&run);
        assert_eq!(source.balls(), &[B]);
        assert_eq!(target.balls(), &[A, A]);
    }

    #[test]
    fn test_tall_tube_spills_past_inline_storage() {
        let mut tube = Tube::from_balls(6, [A, B, B, B, B]).unwrap();
        assert_eq!(tube.len(), 5);
        assert_eq!(tube.top_run(), 4);

        tube.put_top(&[B]);
        assert!(tube.is_full());
        assert_eq!(tube.balls(), &[A, B, B, B, B, B]);

        let run = tube.take_top(5);
        assert_eq!(run.as_slice(), &[B; 5]);
        assert_eq!(tube.balls(), &[A]);
    }
}
