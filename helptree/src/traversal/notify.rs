//! Completion notifier: one notification per distinct terminal entry.
//!
//! When the traversal enters a leaf node the session emits a [`Completion`]
//! carrying that node's terminal value, and delivers it to every registered
//! [`CompletionHandler`]. Re-evaluating the same terminal entry must not
//! re-emit; leaving and re-entering must. The [`CompletionTracker`] latch
//! implements exactly that rule.

use serde::{Deserialize, Serialize};

/// Terminal outcome of one traversal.
///
/// Emitted when the traversal enters a leaf node. `value` is the node's
/// terminal value, or JSON null when the leaf carries none; terminality
/// never depends on the value being present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    /// Identifier of the leaf node that was entered.
    pub node_id: String,
    /// The leaf's terminal value (JSON null when absent).
    pub value: serde_json::Value,
}

impl Completion {
    /// Builds a completion for `node_id`, defaulting a missing value to null.
    pub fn new(node_id: impl Into<String>, value: Option<serde_json::Value>) -> Self {
        Self {
            node_id: node_id.into(),
            value: value.unwrap_or(serde_json::Value::Null),
        }
    }
}

/// Embedder-supplied observer of terminal entries.
///
/// Handlers run synchronously inside the call that caused the transition,
/// after the session's current id already holds the terminal identifier.
/// Called exactly once per distinct entry into a terminal node.
pub trait CompletionHandler: Send + Sync {
    /// Consumes one completion.
    fn on_complete(&self, completion: &Completion);
}

/// Per-entry latch behind the exactly-once rule.
///
/// Armed after every transition (edge selection or reset); latched when a
/// terminal entry fires. While latched, repeated evaluation of the same entry
/// emits nothing.
#[derive(Debug, Clone, Default)]
pub(super) struct CompletionTracker {
    fired: bool,
}

impl CompletionTracker {
    /// Re-arms the latch. Called on every transition, including transitions
    /// to a missing node.
    pub(super) fn on_transition(&mut self) {
        self.fired = false;
    }

    /// Latches and reports true on the first call per entry; false afterward.
    pub(super) fn try_fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}
