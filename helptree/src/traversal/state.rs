//! Bare traversal state: the current node identifier.
//!
//! This is the only mutable state the engine owns. The invariant is loose by
//! design: `current_id` is either a valid key in the graph or an identifier
//! with no node, which resolves to Missing and is tolerated, not rejected.

use crate::graph::Graph;

/// Pointer-in-graph for one traversal session.
///
/// Created at the graph's root, moved by edge selection, and put back at the
/// root by reset. Discarded with the session; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    current_id: String,
}

impl TraversalState {
    /// Constructs state positioned at the graph's root.
    ///
    /// When the root id names no node the state still constructs; resolution
    /// simply reports Missing.
    pub fn initialize(graph: &Graph) -> Self {
        Self {
            current_id: graph.root_id.clone(),
        }
    }

    /// Moves to `target`. The caller must only pass a target drawn from the
    /// current node's options; `Session::select_edge` enforces that.
    pub fn select_edge(&mut self, target: impl Into<String>) {
        self.current_id = target.into();
    }

    /// Unconditionally returns to the graph's root, regardless of the current
    /// position. Idempotent.
    pub fn reset(&mut self, graph: &Graph) {
        self.current_id = graph.root_id.clone();
    }

    /// The identifier this traversal is currently at.
    pub fn current_id(&self) -> &str {
        &self.current_id
    }
}
