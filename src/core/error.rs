//! Error types for game searches and strategies.

use thiserror::Error;

use crate::minimax::NodeId;

/// Everything that can abort a search or a strategy.
///
/// All conditions are local to one search. Searches are deterministic and
/// exhaustive, so none of these is worth retrying.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SearchError {
    /// A state that the game does not flag as over has no legal moves.
    ///
    /// This is a bug in the concrete game, not in the search.
    #[error("malformed game: state {state} is not over but has no legal moves")]
    MalformedGame { state: String },

    /// A move was applied to a state that does not allow it.
    #[error("invalid move {mv} for state {state}")]
    InvalidMove { mv: String, state: String },

    /// External input could not be turned into a move.
    #[error("cannot parse move from '{input}': {reason}")]
    ParseMove { input: String, reason: String },

    /// The search was stopped through its cancel token.
    #[error("search cancelled")]
    Cancelled,

    /// A node's score was needed before the node was finalised.
    #[error("{node} has no score")]
    UnscoredNode { node: NodeId },

    /// Reading interactive input failed.
    #[error("failed to read move input: {0}")]
    Input(#[from] std::io::Error),
}

impl SearchError {
    /// Build a `MalformedGame` error for a state.
    pub fn malformed(state: &impl std::fmt::Debug) -> Self {
        SearchError::MalformedGame {
            state: format!("{state:?}"),
        }
    }

    /// Build an `InvalidMove` error for a move and the state it was applied to.
    pub fn invalid_move(mv: &impl std::fmt::Debug, state: &impl std::fmt::Debug) -> Self {
        SearchError::InvalidMove {
            mv: format!("{mv:?}"),
            state: format!("{state:?}"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
