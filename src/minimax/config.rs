//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

/// Which of the two equivalent evaluators a search uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluatorKind {
    /// Depth-first recursion on the call stack.
    Recursive,
    /// Explicit work stack over a node arena.
    #[default]
    Iterative,
}

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Evaluator used for every candidate move.
    pub evaluator: EvaluatorKind,

    /// Evaluate candidate moves on the rayon thread pool.
    /// Results and tie-breaking are identical to the sequential path.
    pub parallel: bool,

    /// Initial capacity of the iterative evaluator's arena and stack.
    /// Only affects allocation, never results.
    pub stack_capacity: usize,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            evaluator: EvaluatorKind::default(),
            parallel: false,
            stack_capacity: 1024,
        }
    }
}

impl MinimaxConfig {
    /// Create a new config with the given evaluator.
    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Create a new config with parallel candidate evaluation on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create a new config with custom arena capacity.
    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }
}
