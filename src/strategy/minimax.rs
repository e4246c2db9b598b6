//! Minimax strategy: play the move with the best exact value.

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::core::{GameState, Result, SearchError};
use crate::minimax::{self, CancelToken, EvaluatorKind, MinimaxConfig, Score};
use crate::rules::{Game, MoveOf};

use super::Strategy;

/// Choose a move with the recursive evaluator.
pub fn recursive_minimax_strategy<G: Game + Sync>(game: &G) -> Result<Option<MoveOf<G>>> {
    MinimaxStrategy::recursive().best_move(game)
}

/// Choose a move with the iterative evaluator.
pub fn iterative_minimax_strategy<G: Game + Sync>(game: &G) -> Result<Option<MoveOf<G>>> {
    MinimaxStrategy::iterative().best_move(game)
}

/// Exact minimax player.
///
/// For every legal move from the current state, the resulting state is
/// evaluated from the opponent's side and negated. The first move with the
/// highest value wins; ties never depend on scheduling, even with
/// `config.parallel`.
#[derive(Clone, Debug, Default)]
pub struct MinimaxStrategy {
    config: MinimaxConfig,
    cancel: CancelToken,
}

impl MinimaxStrategy {
    /// Create a strategy from a configuration.
    pub fn new(config: MinimaxConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
        }
    }

    /// Strategy backed by the recursive evaluator.
    pub fn recursive() -> Self {
        Self::new(MinimaxConfig::default().with_evaluator(EvaluatorKind::Recursive))
    }

    /// Strategy backed by the iterative evaluator.
    pub fn iterative() -> Self {
        Self::new(MinimaxConfig::default().with_evaluator(EvaluatorKind::Iterative))
    }

    /// Set a cancel token shared by every candidate search.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Value of every legal move for the acting player, in move order.
    pub fn move_values<G: Game + Sync>(&self, game: &G) -> Result<Vec<(MoveOf<G>, Score)>> {
        let successors = game.current_state().successors();

        let value = |(mv, next): (MoveOf<G>, G::State)| -> Result<(MoveOf<G>, Score)> {
            let score = -minimax::evaluate_with(game, &next, &self.config, &self.cancel)?;
            trace!(?mv, %score, "candidate move");
            Ok((mv, score))
        };

        if self.config.parallel {
            successors.into_par_iter().map(value).collect()
        } else {
            successors.into_iter().map(value).collect()
        }
    }

    /// The first legal move with the highest value.
    pub fn best_move<G: Game + Sync>(&self, game: &G) -> Result<Option<MoveOf<G>>> {
        let state = game.current_state();
        if game.is_over(state) {
            debug!(?state, "game already over, no move to choose");
            return Ok(None);
        }

        let values = self.move_values(game)?;
        if values.is_empty() {
            warn!(?state, "non-terminal state has no legal moves");
            return Err(SearchError::malformed(state));
        }
        debug!(
            candidates = values.len(),
            evaluator = ?self.config.evaluator,
            parallel = self.config.parallel,
            "scored candidate moves"
        );
        Ok(first_best(values))
    }
}

impl<G: Game + Sync> Strategy<G> for MinimaxStrategy {
    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>> {
        self.best_move(game)
    }
}

/// First entry with the maximum score.
fn first_best<M>(values: Vec<(M, Score)>) -> Option<M> {
    let mut best: Option<(M, Score)> = None;
    for (mv, score) in values {
        if best.as_ref().map_or(true, |(_, top)| score > *top) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}
