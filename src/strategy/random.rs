//! Random strategy: any legal move, uniformly.

use crate::core::{GameRng, GameRngState, GameState, Result, SearchError};
use crate::rules::{Game, MoveOf};

use super::Strategy;

/// Uniformly random player.
///
/// Seeded, so a game against it can be replayed exactly. A game can also be
/// resumed part way through from [`RandomStrategy::rng_state`].
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a random player with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a random player seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Resume a random player saved with [`RandomStrategy::rng_state`].
    pub fn from_rng_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    /// Save the player's position in its random stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<G: Game> Strategy<G> for RandomStrategy {
    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>> {
        let state = game.current_state();
        if game.is_over(state) {
            return Ok(None);
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::malformed(state));
        }
        Ok(self.rng.choose(&moves).cloned())
    }
}
