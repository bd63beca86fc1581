//! Node and edge records: prompt payload, labeled options, terminal value.
//!
//! A node is a leaf iff its options are empty; that is the sole terminality
//! rule. The terminal value is opaque to the engine and only meaningful on a
//! leaf; it is carried as `serde_json::Value` so embedders can attach whatever
//! outcome payload they need.

use serde::{Deserialize, Serialize};

/// Display payload of a node, opaque to the engine.
///
/// `Text` is the common case; `Rendered` carries an arbitrary payload for
/// adapters that draw richer content. Serialized untagged, so a plain string
/// in a graph file is a text prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prompt {
    /// Plain text shown as-is.
    Text(String),
    /// Opaque rich content; the adapter decides how to draw it.
    Rendered(serde_json::Value),
}

impl Prompt {
    /// Builds a text prompt.
    pub fn text(s: impl Into<String>) -> Self {
        Prompt::Text(s.into())
    }

    /// Returns the text when this is a text prompt.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Prompt::Text(s) => Some(s),
            Prompt::Rendered(_) => None,
        }
    }
}

/// A labeled transition to another node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier of the node this edge leads to.
    pub target: String,
    /// Label shown next to the option.
    pub label: String,
}

impl Edge {
    /// Builds an edge to `target` with the given display label.
    pub fn new(target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
        }
    }
}

/// One node of a decision tree: a prompt plus zero or more labeled options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// What the adapter shows when this node is active.
    pub prompt: Prompt,
    /// Ordered outgoing edges. Empty means this node is a leaf.
    #[serde(default)]
    pub options: Vec<Edge>,
    /// Outcome payload reported on entering this node, when it is a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_value: Option<serde_json::Value>,
}

impl GraphNode {
    /// Builds a non-terminal node with the given options.
    pub fn branch(prompt: Prompt, options: Vec<Edge>) -> Self {
        Self {
            prompt,
            options,
            terminal_value: None,
        }
    }

    /// Builds a leaf node with an optional terminal value.
    pub fn leaf(prompt: Prompt, terminal_value: Option<serde_json::Value>) -> Self {
        Self {
            prompt,
            options: Vec::new(),
            terminal_value,
        }
    }

    /// True iff this node has no outgoing edges.
    ///
    /// Terminality depends only on `options`; a populated `terminal_value` on
    /// a node with edges does not make it a leaf.
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }
}
