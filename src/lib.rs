//! # zerosum
//!
//! A generic engine for two-player, zero-sum, perfect-information games,
//! with exact minimax search.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine knows nothing about any particular game.
//!    Games implement `GameState` and `Game`.
//!
//! 2. **Persistent States**: `make_move` returns a new state. Searches
//!    explore hypothetical futures and never touch the real game.
//!
//! 3. **Two Equivalent Evaluators**: a recursive negamax and an iterative
//!    explicit-stack simulation of it, required to agree on every state.
//!
//! ## Architecture
//!
//! - **Exhaustive Search**: no pruning, no transposition tables, no move
//!   ordering. Games must terminate in finitely many plies.
//!
//! - **Scores**: `Score::Loss`, `Score::Draw`, `Score::Win` for the player
//!   to move; negation flips perspective.
//!
//! ## Modules
//!
//! - `core`: Players, the state trait, errors, RNG
//! - `rules`: The game trait
//! - `minimax`: Recursive and iterative evaluators
//! - `strategy`: Minimax, rough-outcome, random and interactive players

pub mod core;
pub mod minimax;
pub mod rules;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, GameState, PlayerId, SearchError};

pub use crate::rules::{Game, GameResult, MoveOf};

pub use crate::minimax::{
    CancelToken, EvaluatorKind, IterativeSearch, MinimaxConfig, NodeId, Score, SearchNode,
    SearchStats, SearchTree,
};

pub use crate::strategy::{
    iterative_minimax_strategy, recursive_minimax_strategy, InteractiveStrategy,
    MinimaxStrategy, RandomStrategy, RoughOutcome, RoughOutcomeStrategy, Strategy,
};
