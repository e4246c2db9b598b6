//! Iterative search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one iterative evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes allocated in the arena.
    pub nodes_allocated: u32,

    /// Non-terminal nodes whose children were discovered.
    pub expansions: u32,

    /// Terminal nodes scored in a single visit.
    pub terminal_visits: u32,

    /// Non-terminal nodes scored from their children.
    pub finalisations: u32,

    /// Largest work stack size seen.
    pub max_stack_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes that entered the completed list.
    #[must_use]
    pub fn completed(&self) -> u32 {
        self.terminal_visits + self.finalisations
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_allocated as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expansions == 0 {
            0.0
        } else {
            // every node except the root is some expansion's child
            (self.nodes_allocated.saturating_sub(1)) as f64 / self.expansions as f64
        }
    }
}
