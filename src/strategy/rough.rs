//! Rough-outcome strategy: a two-ply guess instead of a full search.
//!
//! Weaker than minimax, better than random. It only looks one or two plies
//! ahead, so it can walk into losses a full search would see.

use crate::core::{GameState, Result, SearchError};
use crate::minimax::Score;
use crate::rules::{Game, MoveOf};

use super::Strategy;

/// Games that can estimate a state's value without a full search.
pub trait RoughOutcome: Game + Sized {
    /// Guessed value in `[-1, 1]` for the state's acting player.
    ///
    /// - over: the exact terminal score
    /// - some move wins on the spot: `1`
    /// - every move lets the opponent win on the spot: `-1`
    /// - otherwise a value in between; the default says `0`
    fn rough_outcome(&self, state: &Self::State) -> f64 {
        if self.is_over(state) {
            return f64::from(Score::terminal(self, state).value());
        }

        let successors = state.successors();
        if successors.iter().any(|(_, next)| ends_in_loss(self, next)) {
            return 1.0;
        }

        let opponent_wins = |next: &Self::State| {
            if self.is_over(next) {
                Score::terminal(self, next) == Score::Win
            } else {
                next.successors().iter().any(|(_, after)| ends_in_loss(self, after))
            }
        };
        if !successors.is_empty() && successors.iter().all(|(_, next)| opponent_wins(next)) {
            return -1.0;
        }

        0.0
    }
}

/// True if `state` is over and lost for its mover.
fn ends_in_loss<G: Game>(game: &G, state: &G::State) -> bool {
    game.is_over(state) && Score::terminal(game, state) == Score::Loss
}

/// Player that minimises the opponent's rough outcome.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoughOutcomeStrategy;

impl<G: RoughOutcome> Strategy<G> for RoughOutcomeStrategy {
    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>> {
        let state = game.current_state();
        if game.is_over(state) {
            return Ok(None);
        }

        let mut best: Option<(MoveOf<G>, f64)> = None;
        for (mv, next) in state.successors() {
            // Bad for the opponent is good for us.
            let guess = -game.rough_outcome(&next);
            if best.as_ref().map_or(true, |(_, top)| guess > *top) {
                best = Some((mv, guess));
            }
        }
        match best {
            Some((mv, _)) => Ok(Some(mv)),
            None => Err(SearchError::malformed(state)),
        }
    }
}
