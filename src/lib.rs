//! # rust-ttt
//!
//! A rules engine for square-board line games: classic 3x3 tic-tac-toe,
//! generalized to any NxN board and any ordered roster of two or more
//! players.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, no input handling, no event loop.
//!    A presentation layer owns those and drives the engine through a
//!    small synchronous call surface, one input event at a time.
//!
//! 2. **N-player first**: the roster is an ordered list, not a pair.
//!    Turn order cycles through however many players the game was built
//!    with.
//!
//! 3. **Fail fast on programmer errors**: malformed construction
//!    panics. Illegal-but-expected play (an occupied cell, a move after
//!    the game ended) is a `false` from [`Game::is_valid_move`], never
//!    an error.
//!
//! ## Modules
//!
//! - `core`: players, turn order, board storage, winning-line geometry
//! - `rules`: outcome evaluation and the [`Game`] facade

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Coord, LineSet, Move, Player, Roster, TurnOrder, WinningLine};

pub use crate::rules::{Game, GameBuilder, GameStatus, MoveRecord, Win};
