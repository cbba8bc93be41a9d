//! Play-session state for the Laballatory ball-sort puzzle.
//!
//! A [`Session`] is the single owner of everything that changes while
//! playing: the menu/playing/won [`Mode`], the selected difficulty, and the
//! [`Game`] in progress with its tube [`Selection`] and undo/redo
//! [`History`].
//!
//! The presentation layer talks to it in two directions only. It forwards
//! user input as [`Intent`]s through [`Session::dispatch`], and it renders
//! the [`SessionView`] snapshot returned by [`Session::view`]. Intents that do
//! not apply in the current state are ignored; [`Session::try_dispatch`]
//! reports why as a [`GameError`].
//!
//! # Examples
//!
//! ```
//! use laballatory_core::Board;
//! use laballatory_game::{Intent, Mode, Session};
//!
//! let mut session = Session::new();
//! session.play_board(Board::parse(4, "AA|B||").unwrap());
//!
//! session.dispatch(Intent::TubeClicked(0));
//! session.dispatch(Intent::TubeClicked(2));
//!
//! let view = session.view();
//! assert_eq!(view.mode, Mode::Playing);
//! assert_eq!(view.moves, 1);
//! assert!(view.tubes[0].balls.is_empty());
//! assert_eq!(view.tubes[2].balls.len(), 2);
//! ```

pub use self::{
    error::GameError,
    game::Game,
    history::{History, HistorySnapshot},
    intent::{Intent, IntentQueue},
    selection::{Selection, Transition},
    session::{Mode, Session},
    settings::SessionSettings,
    view::{SessionView, TubeView},
};

mod error;
mod game;
mod history;
mod intent;
mod selection;
mod session;
mod settings;
mod undo_redo_stack;
mod view;
