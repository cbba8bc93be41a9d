use laballatory_core::{Color, Difficulty, Tube};
use laballatory_generator::LevelSeed;

use crate::{Game, Mode, Session};

/// How one tube should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TubeView {
    /// Balls from bottom to top.
    pub balls: Vec<Color>,
    /// Number of balls the tube can hold.
    pub capacity: usize,
    /// The ball previewed above the tube, its topmost color.
    pub over: Option<Color>,
    /// Whether the tube is full of a single color.
    pub is_complete: bool,
    /// Whether the tube is armed as a pour source.
    pub is_selected: bool,
}

impl TubeView {
    fn new(tube: &Tube, is_selected: bool) -> Self {
        Self {
            balls: tube.balls().to_vec(),
            capacity: tube.capacity(),
            over: tube.over_color(),
            is_complete: tube.is_complete(),
            is_selected,
        }
    }
}

/// Immutable snapshot of everything a front end renders.
///
/// On the menu there are no tubes and every counter is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// The current screen.
    pub mode: Mode,
    /// The selected difficulty.
    pub difficulty: Difficulty,
    /// Tubes in board order.
    pub tubes: Vec<TubeView>,
    /// Index of the armed tube.
    pub selected: Option<usize>,
    /// Pours made to reach the current board.
    pub moves: usize,
    /// Number of available undo steps.
    pub undo_count: usize,
    /// Number of available redo steps.
    pub redo_count: usize,
    /// Whether the level is solved.
    pub is_won: bool,
    /// Seed of the loaded level.
    pub seed: Option<LevelSeed>,
}

impl SessionView {
    #[must_use]
    pub(crate) fn new(session: &Session) -> Self {
        let mode = session.mode();
        let difficulty = session.difficulty();
        let Some(game) = session.game() else {
            return Self {
                mode,
                difficulty,
                tubes: Vec::new(),
                selected: None,
                moves: 0,
                undo_count: 0,
                redo_count: 0,
                is_won: false,
                seed: None,
            };
        };
        let selected = game.selection().armed();
        Self {
            mode,
            difficulty,
            tubes: build_tube_views(game, selected),
            selected,
            moves: game.moves(),
            undo_count: game.history().undo_count(),
            redo_count: game.history().redo_count(),
            is_won: mode.is_won(),
            seed: game.seed(),
        }
    }
}

fn build_tube_views(game: &Game, selected: Option<usize>) -> Vec<TubeView> {
    game.board()
        .tubes()
        .iter()
        .enumerate()
        .map(|(index, tube)| TubeView::new(tube, selected == Some(index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use laballatory_core::Board;

    use crate::Intent;

    use super::*;

    fn session(text: &str) -> Session {
        let mut session = Session::new();
        session.play_board(Board::parse(4, text).unwrap());
        session
    }

    #[test]
    fn test_menu_view_is_empty() {
        let view = Session::new().view();
        assert_eq!(view.mode, Mode::Menu);
        assert_eq!(view.difficulty, Difficulty::Medium);
        assert!(view.tubes.is_empty());
        assert_eq!(view.selected, None);
        assert_eq!(view.seed, None);
        assert!(!view.is_won);
    }

    #[test]
    fn test_tube_views_follow_board() {
        let [a, b, ..] = Color::ALL;
        let mut session = session("AAAA|BA|B|");
        session.dispatch(Intent::TubeClicked(1));

        let view = session.view();
        assert_eq!(view.mode, Mode::Playing);
        assert_eq!(view.selected, Some(1));
        assert_eq!(
            view.tubes,
            [
                TubeView {
                    balls: vec![a; 4],
                    over: Some(a),
                    is_complete: true,
                    is_selected: false,
                    capacity: 4,
                },
                TubeView {
                    balls: vec![b, a],
                    over: Some(a),
                    is_complete: false,
                    is_selected: true,
                    capacity: 4,
                },
                TubeView {
                    balls: vec![b],
                    over: Some(b),
                    is_complete: false,
                    is_selected: false,
                    capacity: 4,
                },
                TubeView {
                    balls: vec![],
                    over: None,
                    is_complete: false,
                    is_selected: false,
                    capacity: 4,
                },
            ]
        );
    }

    #[test]
    fn test_counters_track_history() {
        let mut session = session("AAA|A|BB|BB");
        for index in [0, 1, 2, 3] {
            session.dispatch(Intent::TubeClicked(index));
        }
        let view = session.view();
        assert!(view.is_won);
        assert_eq!(view.mode, Mode::Won);
        assert_eq!(view.moves, 2);
        assert_eq!((view.undo_count, view.redo_count), (2, 0));

        session.dispatch(Intent::Undo);
        let view = session.view();
        assert!(!view.is_won);
        assert_eq!(view.moves, 1);
        assert_eq!((view.undo_count, view.redo_count), (1, 1));
        assert_eq!(view.selected, None);
    }
}
