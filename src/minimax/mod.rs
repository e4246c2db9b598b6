//! Exact minimax search for zero-sum games.
//!
//! ## Overview
//!
//! Two evaluators compute the same function, the negamax value of a state
//! for the player to move:
//!
//! - **Recursive**: depth-first recursion over the full game tree
//! - **Iterative**: the same traversal driven by an explicit work stack over
//!   a node arena, so deep trees never touch the call stack
//!
//! Neither prunes or memoises: every reachable state is visited. Both are
//! pure with respect to the caller's game and only explore hypothetical
//! states produced by `make_move`.
//!
//! ## Usage
//!
//! ```rust
//! use zerosum::minimax::{self, EvaluatorKind, MinimaxConfig, Score};
//! use zerosum::rules::Game;
//!
//! fn example<G: Game>(game: &G) -> zerosum::core::Result<Score> {
//!     let config = MinimaxConfig::default().with_evaluator(EvaluatorKind::Recursive);
//!     minimax::evaluate_with(game, game.current_state(), &config, &Default::default())
//! }
//! ```

pub mod cancel;
pub mod config;
pub mod iterative;
pub mod node;
pub mod recursive;
pub mod score;
pub mod stats;
pub mod tree;

pub use cancel::CancelToken;
pub use config::{EvaluatorKind, MinimaxConfig};
pub use iterative::IterativeSearch;
pub use node::{NodeId, SearchNode};
pub use score::Score;
pub use stats::SearchStats;
pub use tree::SearchTree;

use crate::core::Result;
use crate::rules::Game;

/// Score `state` for its acting player with the default evaluator.
pub fn evaluate<G: Game>(game: &G, state: &G::State) -> Result<Score> {
    evaluate_with(game, state, &MinimaxConfig::default(), &CancelToken::new())
}

/// Score `state` with the evaluator chosen by `config`.
pub fn evaluate_with<G: Game>(
    game: &G,
    state: &G::State,
    config: &MinimaxConfig,
    cancel: &CancelToken,
) -> Result<Score> {
    match config.evaluator {
        EvaluatorKind::Recursive => recursive::evaluate_with(game, state, cancel),
        EvaluatorKind::Iterative => IterativeSearch::with_capacity(game, config.stack_capacity)
            .with_cancel(cancel.clone())
            .evaluate(state),
    }
}
