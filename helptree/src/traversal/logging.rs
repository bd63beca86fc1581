//! Logging helpers for traversal events.
//!
//! Structured logging for session start, transitions, completions, and
//! missing-node resolutions. The engine logs; the embedder decides whether a
//! subscriber is installed.

use crate::traversal::Completion;

/// Log session start at the given root id.
pub fn log_session_start(root_id: &str) {
    tracing::info!(root_id = root_id, "Starting traversal session");
}

/// Log an edge-selection transition.
pub fn log_select_edge(from: &str, target: &str) {
    tracing::debug!(from = from, target = target, "Edge selected");
}

/// Log a reset back to the root.
pub fn log_reset(root_id: &str) {
    tracing::debug!(root_id = root_id, "Traversal reset to root");
}

/// Log a completion emission.
pub fn log_completion(completion: &Completion) {
    tracing::info!(node_id = %completion.node_id, value = %completion.value, "Terminal node reached");
}

/// Log resolution of the current id to no node.
pub fn log_missing(id: &str) {
    tracing::warn!(node_id = id, "Current id resolves to no node");
}
