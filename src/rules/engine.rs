//! Game trait for concrete game implementations.
//!
//! A game wraps the current state and owns the rules that the state alone
//! cannot answer:
//! - Is a state over?
//! - Who won it?
//! - How does text input become a move?

use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Shorthand for the move type of a game.
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Over with no declared winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// A two-player zero-sum game.
///
/// ## Implementation Notes
///
/// - `current_state` is the only mutable part of a game. Searches read it
///   and never write to it; the caller advances it with `play` or
///   `set_current_state` after a strategy has chosen.
/// - `is_winner` is only consulted for states where `is_over` holds.
/// - Every finite game must flag a state as over before it runs out of
///   legal moves, otherwise searches fail with `MalformedGame`.
pub trait Game {
    /// The state type this game is played on.
    type State: GameState;

    /// The state the real game is in.
    fn current_state(&self) -> &Self::State;

    /// Replace the current state.
    fn set_current_state(&mut self, state: Self::State);

    /// Check if a state ends the game.
    fn is_over(&self, state: &Self::State) -> bool;

    /// Check if `player` has won in a finished state.
    fn is_winner(&self, state: &Self::State, player: PlayerId) -> bool;

    /// Convert user input into a move.
    ///
    /// Only parses; the move may still be invalid for the current state.
    fn parse_move(&self, input: &str) -> Result<MoveOf<Self>>;

    /// How to play, for text front ends.
    fn instructions(&self) -> String;

    // === Convenience Methods ===

    /// Outcome of a state, `None` while the game continues.
    fn result(&self, state: &Self::State) -> Option<GameResult> {
        if !self.is_over(state) {
            return None;
        }
        let winner = PlayerId::ALL
            .into_iter()
            .find(|&player| self.is_winner(state, player));
        Some(winner.map_or(GameResult::Draw, GameResult::Winner))
    }

    /// Apply a move to the real game.
    ///
    /// Fails with `InvalidMove` and leaves the game untouched if the move is
    /// not legal from the current state.
    fn play(&mut self, mv: &MoveOf<Self>) -> Result<()> {
        let next = self.current_state().try_move(mv)?;
        self.set_current_state(next);
        Ok(())
    }
}
