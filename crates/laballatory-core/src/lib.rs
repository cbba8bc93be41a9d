//! Core data structures for the Laballatory ball-sort puzzle.
//!
//! This crate holds the board model and the pouring rules. Everything here is
//! a pure value: boards never change after construction, and every transition
//! produces a new board. Level generation and the interactive session live in
//! `laballatory-generator` and `laballatory-game`.
//!
//! # Overview
//!
//! - [`color`]: [`Color`], an index into the fixed ball palette
//! - [`tube`]: [`Tube`], a capacity-bounded stack of balls
//! - [`board`]: [`Board`], [`Move`], and the legality rules ([`MoveError`])
//! - [`difficulty`]: [`Difficulty`] tiers and the [`DifficultyConfig`] they map to
//!
//! # Examples
//!
//! ```
//! use laballatory_core::Board;
//!
//! // Two tubes of `A` that only need consolidating.
//! let board = Board::parse(4, "A|AAA").unwrap();
//! assert!(!board.is_won());
//!
//! let board = board.try_apply_move(0, 1).unwrap();
//! assert!(board.is_won());
//! ```

pub mod board;
pub mod color;
pub mod difficulty;
pub mod tube;

pub use self::{
    board::{Board, BoardError, Move, MoveError, ParseBoardError},
    color::Color,
    difficulty::{ConfigError, Difficulty, DifficultyConfig, ParseDifficultyError},
    tube::Tube,
};
