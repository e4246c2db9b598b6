//! Search node record for the iterative evaluator.
//!
//! Uses arena-based allocation with index references (NodeId), the same way
//! the recursion's call frames would reference each other.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::score::Score;

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A pending or completed minimax call.
///
/// Lifecycle:
/// 1. created unscored with no children when its state is pushed
/// 2. children filled in on the first visit (non-terminal states only)
/// 3. scored exactly once, after every child is scored
///
/// Once scored the node is only read, by its parent's lookup.
#[derive(Clone, Debug)]
pub struct SearchNode<S> {
    /// The state this node wraps.
    pub state: S,

    /// Child nodes, one per legal move, in move order.
    /// SmallVec covers the typical branching factor without allocating.
    pub children: SmallVec<[NodeId; 8]>,

    /// Score for the state's mover, `None` until finalised.
    pub score: Option<Score>,
}

impl<S> SearchNode<S> {
    /// Create an unscored leaf.
    pub fn new(state: S) -> Self {
        Self {
            state,
            children: SmallVec::new(),
            score: None,
        }
    }

    /// Check if the children have been discovered.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if the node has been finalised.
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }
}
