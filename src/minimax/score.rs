//! Exact game-theoretic scores.

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::rules::Game;

/// Value of a state for the player to move.
///
/// Variants are declared worst to best so `Ord` and `max` follow the mover's
/// preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Score {
    /// The mover loses under perfect play.
    Loss = -1,
    /// Neither player can force a win.
    Draw = 0,
    /// The mover wins under perfect play.
    Win = 1,
}

impl Score {
    /// Score of a finished state for its acting player.
    ///
    /// `Win` if the mover won, `Loss` if the opponent won, `Draw` otherwise.
    pub fn terminal<G: Game>(game: &G, state: &G::State) -> Self {
        let mover = state.acting_player();
        if game.is_winner(state, mover) {
            Score::Win
        } else if game.is_winner(state, mover.opponent()) {
            Score::Loss
        } else {
            Score::Draw
        }
    }

    /// Numeric value in `{-1, 0, 1}`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i8 {
        self as i8
    }
}

impl std::ops::Neg for Score {
    type Output = Score;

    /// The same outcome seen from the opponent's side.
    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Loss,
        }
    }
}

impl From<Score> for i8 {
    fn from(score: Score) -> i8 {
        score.value()
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.value())
    }
}
