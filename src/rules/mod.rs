//! Rules layer: outcome evaluation and the `Game` engine facade.

pub mod outcome;
pub mod engine;

pub use outcome::{GameStatus, Win};
pub use engine::{Game, GameBuilder, MoveRecord};
