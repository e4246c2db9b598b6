//! Recursive negamax evaluator.
//!
//! Plain depth-first minimax over the full game tree: no pruning, no
//! memoisation. A state's score is the best of its children's negated
//! scores, since a score good for the opponent is bad for the mover.

use tracing::warn;

use crate::core::{GameState, Result, SearchError};
use crate::rules::Game;

use super::cancel::CancelToken;
use super::score::Score;

/// Score `state` for its acting player.
///
/// Fails with `MalformedGame` if a reachable state is not over yet has no
/// legal moves.
pub fn evaluate<G: Game>(game: &G, state: &G::State) -> Result<Score> {
    evaluate_with(game, state, &CancelToken::new())
}

/// Like [`evaluate`], checking `cancel` at every node.
pub fn evaluate_with<G: Game>(game: &G, state: &G::State, cancel: &CancelToken) -> Result<Score> {
    cancel.check()?;

    if game.is_over(state) {
        return Ok(Score::terminal(game, state));
    }

    let mut best: Option<Score> = None;
    for (_, next) in state.successors() {
        let score = -evaluate_with(game, &next, cancel)?;
        best = best.max(Some(score));
    }

    best.ok_or_else(|| {
        warn!(?state, "non-terminal state has no legal moves");
        SearchError::malformed(state)
    })
}
