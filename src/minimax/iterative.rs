//! Iterative negamax evaluator.
//!
//! Computes exactly the scores of [`recursive::evaluate`](super::recursive::evaluate)
//! without using the call stack. Each pending call becomes a `SearchNode`
//! in an arena, and a LIFO work stack of node IDs drives a two-visit
//! post-order traversal:
//!
//! 1. **Terminal**: scored from the game result in a single visit.
//! 2. **First visit**: children are created, the node is pushed back, then
//!    every child is pushed on top of it.
//! 3. **Second visit**: every child is already in the completed list; the
//!    node's score is the maximum of the negated child scores.
//!
//! Because children sit above their re-pushed parent on a strictly LIFO
//! stack, a parent is never finalised before its whole subtree is.
//!
//! ## Child lookup
//!
//! A child's score is looked up by its *state*, not by its node ID. Two equal
//! states reached through different move orders share one entry in the
//! completed index. Since a score depends only on the state, this yields the
//! same result as the recursive evaluator.

use std::time::Instant;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{GameState, Result, SearchError};
use crate::rules::Game;

use super::cancel::CancelToken;
use super::node::{NodeId, SearchNode};
use super::score::Score;
use super::stats::SearchStats;
use super::tree::SearchTree;

/// Score `state` for its acting player with a one-shot iterative search.
pub fn evaluate<G: Game>(game: &G, state: &G::State) -> Result<Score> {
    IterativeSearch::new(game).evaluate(state)
}

/// Explicit-stack search context.
///
/// Holds the arena, work stack and completed list between evaluations so
/// their allocations are reused. Each call to `evaluate` starts from scratch.
pub struct IterativeSearch<'g, G: Game> {
    /// The game whose rules decide terminal states.
    game: &'g G,

    /// Every node created by the current evaluation.
    tree: SearchTree<G::State>,

    /// Nodes waiting for a visit.
    stack: Vec<NodeId>,

    /// Scored nodes in the order they were scored.
    completed: Vec<NodeId>,

    /// Completed scores indexed by state.
    scores: FxHashMap<G::State, Score>,

    /// Checked once per popped node.
    cancel: CancelToken,

    /// Statistics for the last evaluation.
    stats: SearchStats,
}

impl<'g, G: Game> IterativeSearch<'g, G> {
    /// Create a search context for a game.
    pub fn new(game: &'g G) -> Self {
        Self::with_capacity(game, 0)
    }

    /// Create a search context with preallocated arena and stack.
    pub fn with_capacity(game: &'g G, capacity: usize) -> Self {
        Self {
            game,
            tree: SearchTree::with_capacity(capacity),
            stack: Vec::with_capacity(capacity),
            completed: Vec::with_capacity(capacity),
            scores: FxHashMap::default(),
            cancel: CancelToken::new(),
            stats: SearchStats::default(),
        }
    }

    /// Set a cancel token.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Score `state` for its acting player.
    pub fn evaluate(&mut self, state: &G::State) -> Result<Score> {
        let start = Instant::now();
        self.reset();

        let root = self.tree.alloc(SearchNode::new(state.clone()));
        self.stats.nodes_allocated = 1;
        self.stack.push(root);

        while let Some(id) = self.stack.pop() {
            self.cancel.check()?;

            let node = self.tree.get(id);
            if self.game.is_over(&node.state) {
                let score = Score::terminal(self.game, &node.state);
                self.complete(id, score);
                self.stats.terminal_visits += 1;
            } else if !node.is_expanded() {
                self.expand(id)?;
            } else {
                let score = self.finalise(id)?;
                self.complete(id, score);
                self.stats.finalisations += 1;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        // The root is the last node to leave the stack, so it is scored last.
        let last = self.completed.last().copied().unwrap_or(root);
        debug_assert_eq!(last, root);
        let score = self
            .tree
            .get(last)
            .score
            .ok_or(SearchError::UnscoredNode { node: last })?;

        debug!(
            %score,
            nodes = self.stats.nodes_allocated,
            expansions = self.stats.expansions,
            max_stack = self.stats.max_stack_depth,
            time_us = self.stats.time_us,
            "iterative evaluation finished"
        );

        Ok(score)
    }

    /// First visit: create children and schedule them above the parent.
    fn expand(&mut self, id: NodeId) -> Result<()> {
        let successors = self.tree.get(id).state.successors();
        if successors.is_empty() {
            let state = &self.tree.get(id).state;
            warn!(?state, "non-terminal state has no legal moves");
            return Err(SearchError::malformed(state));
        }

        let mut children: SmallVec<[NodeId; 8]> = SmallVec::with_capacity(successors.len());
        for (_, next) in successors {
            children.push(self.tree.alloc(SearchNode::new(next)));
        }

        self.stats.nodes_allocated += children.len() as u32;
        self.stats.expansions += 1;

        self.stack.push(id);
        self.stack.extend(children.iter().copied());
        self.stats.max_stack_depth = self.stats.max_stack_depth.max(self.stack.len() as u32);

        self.tree.get_mut(id).children = children;
        Ok(())
    }

    /// Second visit: best negated child score.
    fn finalise(&self, id: NodeId) -> Result<Score> {
        let mut best: Option<Score> = None;

        for &child in &self.tree.get(id).children {
            let score = self
                .scores
                .get(&self.tree.get(child).state)
                .copied()
                .ok_or(SearchError::UnscoredNode { node: child })?;
            best = best.max(Some(-score));
        }

        best.ok_or(SearchError::UnscoredNode { node: id })
    }

    /// Record a node's score and append it to the completed list.
    fn complete(&mut self, id: NodeId, score: Score) {
        let node = self.tree.get_mut(id);
        node.score = Some(score);
        self.scores.insert(node.state.clone(), score);
        self.completed.push(id);
    }

    fn reset(&mut self) {
        self.tree.reset();
        self.stack.clear();
        self.completed.clear();
        self.scores.clear();
        self.stats.reset();
    }

    /// Get search statistics for the last evaluation.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the node arena of the last evaluation.
    #[must_use]
    pub fn tree(&self) -> &SearchTree<G::State> {
        &self.tree
    }

    /// Scored nodes of the last evaluation, in the order they were scored.
    #[must_use]
    pub fn completed(&self) -> &[NodeId] {
        &self.completed
    }
}
