//! Graph model: immutable, caller-owned nodes keyed by identifier.
//!
//! A [`Graph`] maps string identifiers to [`GraphNode`]s and names the root
//! the traversal starts from. The engine never mutates a graph; the only
//! mutable traversal state lives in `traversal::TraversalState`.
//!
//! Lookup goes through [`Graph::resolve`], which returns an explicit
//! [`Resolution`] instead of a bare `Option` so callers must handle the
//! missing-node branch. A missing node is a tolerated degenerate state, not
//! an error.

mod node;

pub use node::{Edge, GraphNode, Prompt};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Result of looking up the current identifier in a graph.
///
/// Missing is a first-class outcome: the presentation adapter renders a
/// fallback view for it and any later transition (typically a reset) can
/// recover. No variant of this enum is an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// The identifier names a node in the graph.
    Found(&'a GraphNode),
    /// No node with that identifier exists in the graph.
    Missing,
}

impl<'a> Resolution<'a> {
    /// Returns the node when found.
    pub fn found(self) -> Option<&'a GraphNode> {
        match self {
            Resolution::Found(node) => Some(node),
            Resolution::Missing => None,
        }
    }

    /// True when the lookup found no node.
    pub fn is_missing(self) -> bool {
        matches!(self, Resolution::Missing)
    }
}

/// A directed graph of prompts and labeled options.
///
/// Built in code with the chaining [`add_node`](Graph::add_node) builder, or
/// deserialized from JSON/YAML. Referential integrity (every edge target
/// resolving to a node) is the supplier's concern: [`validate`](Graph::validate)
/// checks it at construction time, but traversal tolerates dangling targets
/// by resolving to [`Resolution::Missing`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Identifier of the node a fresh or reset traversal starts at.
    pub root_id: String,
    /// All nodes, keyed by identifier.
    pub nodes: HashMap<String, GraphNode>,
}

impl Graph {
    /// Creates an empty graph rooted at `root_id`.
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into(),
            nodes: HashMap::new(),
        }
    }

    /// Adds a node under `id`, replacing any previous node with that id.
    /// Chainable, in the state-graph builder style.
    pub fn add_node(&mut self, id: impl Into<String>, node: GraphNode) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Looks up `id` in the node map.
    pub fn resolve(&self, id: &str) -> Resolution<'_> {
        match self.nodes.get(id) {
            Some(node) => Resolution::Found(node),
            None => Resolution::Missing,
        }
    }

    /// Resolves the root node.
    pub fn root(&self) -> Resolution<'_> {
        self.resolve(&self.root_id)
    }

    /// Construction-time integrity check: the root must exist and every edge
    /// target must name a node.
    ///
    /// Traversal does not require this to have passed; a graph that fails
    /// validation still walks, with dangling targets resolving to Missing.
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&self.root_id) {
            return Err(GraphError::UnknownRoot(self.root_id.clone()));
        }
        for (id, node) in &self.nodes {
            for edge in &node.options {
                if !self.nodes.contains_key(&edge.target) {
                    return Err(GraphError::DanglingEdge {
                        from: id.clone(),
                        target: edge.target.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
