//! Engine error types.
//!
//! The taxonomy is deliberately small: a missing node is not an error (it is
//! `Resolution::Missing`), so errors only cover construction-time graph
//! integrity and caller precondition violations.

use thiserror::Error;

/// Construction-time graph integrity failure, reported by `Graph::validate`.
///
/// Validation is optional for traversal: a graph that fails it still walks,
/// with dangling targets resolving to Missing at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The root id names no node in the graph.
    #[error("root id {0:?} names no node")]
    UnknownRoot(String),

    /// An edge points at an id with no node.
    #[error("node {from:?} has an edge to unknown node {target:?}")]
    DanglingEdge { from: String, target: String },
}

/// Caller precondition violation during traversal.
///
/// The adapter only ever offers edges drawn from the current node's options,
/// so these arise from integration bugs, not from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// The selected target is not among the current node's options (or the
    /// current node is a leaf or missing, which offers no options at all).
    #[error("edge to {target:?} is not selectable from node {from:?}")]
    InvalidEdge { from: String, target: String },
}
