//! The state abstraction every concrete game implements.
//!
//! ## Persistence
//!
//! States are immutable once built. `make_move` returns a new value and
//! leaves the receiver untouched, so searches can explore hypothetical
//! futures without ever touching the real game.
//!
//! ## Equality
//!
//! Equality is structural: two states are equal iff they have the same acting
//! player and the same condition data. The iterative evaluator relies on this
//! to match children with their scores, so `Eq` and `Hash` must agree.
//!
//! ## Invalid moves
//!
//! `make_move` is total. Given a move the state does not allow it returns
//! the state unchanged. Both evaluators apply moves through
//! [`GameState::make_move`] only, so they always share this policy.
//! Callers applying moves from outside the search use
//! [`GameState::try_move`], which rejects invalid moves instead.

use std::fmt::Debug;
use std::hash::Hash;

use super::error::{Result, SearchError};
use super::player::PlayerId;

/// A position in a two-player zero-sum game.
pub trait GameState: Clone + Eq + Hash + Debug + Send + Sync {
    /// Game-specific move token.
    type Move: Clone + Eq + Hash + Debug + Send + Sync;

    /// The player whose turn it is.
    fn acting_player(&self) -> PlayerId;

    /// All moves available to the acting player.
    ///
    /// Order matters: strategies break ties by the first move in this order.
    /// Must be empty iff the state is terminal for search purposes.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move, producing the successor state.
    ///
    /// Must not fail for any move returned by `legal_moves`. An invalid move
    /// returns a copy of `self`.
    fn make_move(&self, mv: &Self::Move) -> Self;

    /// Check whether a move is allowed from this state.
    fn is_valid_move(&self, mv: &Self::Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// Apply a move, failing if it is not allowed.
    fn try_move(&self, mv: &Self::Move) -> Result<Self> {
        if self.is_valid_move(mv) {
            Ok(self.make_move(mv))
        } else {
            Err(SearchError::invalid_move(mv, self))
        }
    }

    /// Every legal move paired with the state it leads to, in move order.
    fn successors(&self) -> Vec<(Self::Move, Self)> {
        self.legal_moves()
            .into_iter()
            .map(|mv| {
                let next = self.make_move(&mv);
                (mv, next)
            })
            .collect()
    }
}
