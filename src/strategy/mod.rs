//! Strategies: ways of choosing a move for the player to act.
//!
//! Strategies are trait-based so players can be swapped freely:
//! - `MinimaxStrategy`: exact search, the strongest player
//! - `RoughOutcomeStrategy`: shallow two-ply guess
//! - `RandomStrategy`: uniform over legal moves
//! - `InteractiveStrategy`: asks a human
//!
//! A strategy only reads the game. The caller applies the chosen move,
//! e.g. with [`Game::play`](crate::rules::Game::play).

pub mod interactive;
pub mod minimax;
pub mod random;
pub mod rough;

pub use interactive::InteractiveStrategy;
pub use minimax::{iterative_minimax_strategy, recursive_minimax_strategy, MinimaxStrategy};
pub use random::RandomStrategy;
pub use rough::{RoughOutcome, RoughOutcomeStrategy};

use crate::core::Result;
use crate::rules::{Game, MoveOf};

/// Policy for choosing a move from the game's current state.
pub trait Strategy<G: Game> {
    /// Choose a move for the acting player.
    ///
    /// Returns `Ok(None)` when the game is already over. A current state
    /// that is not over but has no legal moves is `MalformedGame`.
    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>>;
}
