//! Game trait for concrete game implementations.
//!
//! Games implement `Game` to define:
//! - Which state is current
//! - When a state is over and who won it
//! - How text input maps to moves
//!
//! The search layer calls into `Game` and `GameState` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{Game, GameResult, MoveOf};
