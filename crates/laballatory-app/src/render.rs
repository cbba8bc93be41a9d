//! Plain-text rendering of the session read model.

use std::fmt::{self, Display};

use laballatory_game::{Mode, SessionView, TubeView};

/// Displays a [`SessionView`] as a text screen.
///
/// Tubes are drawn one per line, bottom ball first, padded with `.` up to the
/// capacity. The armed tube is marked with `>` and complete tubes with `*`.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a>(pub &'a SessionView);

impl Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        match view.mode {
            Mode::Menu => {
                writeln!(f, "== Laballatory ==")?;
                writeln!(f, "difficulty: {}", view.difficulty)?;
                writeln!(f, "type easy, medium or hard to choose, start to play")
            }
            Mode::Playing | Mode::Won => {
                writeln!(
                    f,
                    "{} | moves: {} | undo: {} | redo: {}",
                    view.difficulty, view.moves, view.undo_count, view.redo_count
                )?;
                for (index, tube) in view.tubes.iter().enumerate() {
                    writeln!(f, "{}", TubeLine { number: index + 1, tube })?;
                }
                if let Some(seed) = view.seed {
                    writeln!(f, "seed: {seed}")?;
                }
                if view.is_won {
                    writeln!(f, "You won! In {} moves", view.moves)?;
                    writeln!(f, "type restart for a new game or menu to go back")?;
                }
                Ok(())
            }
        }
    }
}

struct TubeLine<'a> {
    number: usize,
    tube: &'a TubeView,
}

impl Display for TubeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tube = self.tube;
        let marker = if tube.is_selected { '>' } else { ' ' };
        write!(f, "{marker}{:>2} [", self.number)?;
        for ball in &tube.balls {
            write!(f, "{ball}")?;
        }
        for _ in tube.balls.len()..tube.capacity {
            f.write_str(".")?;
        }
        f.write_str("]")?;
        if tube.is_complete {
            f.write_str(" *")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use laballatory_core::Board;
    use laballatory_game::{Intent, Session};

    use super::*;

    #[test]
    fn test_menu_screen() {
        let text = Screen(&Session::new().view()).to_string();
        assert!(text.contains("difficulty: medium"));
    }

    #[test]
    fn test_playing_screen_marks_selection_and_completion() {
        let mut session = Session::new();
        session.play_board(Board::parse(4, "AAAA|BA|B|").unwrap());
        session.dispatch(Intent::TubeClicked(1));

        let text = Screen(&session.view()).to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "medium | moves: 0 | undo: 0 | redo: 0");
        assert_eq!(lines[1], "  1 [AAAA] *");
        assert_eq!(lines[2], "> 2 [BA..]");
        assert_eq!(lines[3], "  3 [B...]");
        assert_eq!(lines[4], "  4 [....]");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_won_screen() {
        let mut session = Session::new();
        session.play_board(Board::parse(4, "A|AAA").unwrap());
        session.dispatch(Intent::TubeClicked(0));
        session.dispatch(Intent::TubeClicked(1));

        let text = Screen(&session.view()).to_string();
        assert!(text.contains("You won! In 1 moves"));
    }
}
