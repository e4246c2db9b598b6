//! Arena holding every node of one iterative search.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. Nodes are
//! never removed during a search, so a `NodeId` stays valid until `reset`.

use super::node::{NodeId, SearchNode};

/// Arena-based search tree.
#[derive(Clone, Debug)]
pub struct SearchTree<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> Default for SearchTree<S> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S> SearchTree<S> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with custom initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node, keeping the allocation.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}
