//! Presentation boundary: how a traversal gets rendered and answered.
//!
//! The engine never draws anything; it hands the active node to a
//! [`PresentationAdapter`] and reads back the chosen edge target. The
//! contract mirrors the view rules: a terminal node is never offered edges,
//! and a missing node must get the fallback call.
//!
//! [`ScriptedAdapter`] is the test/example implementation: it answers from a
//! pre-programmed queue of targets and records everything it was shown.

use std::collections::VecDeque;

use crate::graph::{Edge, Prompt};

/// Rendering seam between the engine and the embedding UI.
///
/// `Session::run` calls exactly one of these methods per evaluation cycle.
/// Implementations must only return targets drawn from `options`; anything
/// else is reported back as a precondition violation.
pub trait PresentationAdapter {
    /// Renders a non-terminal node and returns the chosen edge's target, or
    /// `None` to stop the run without a completion.
    fn select(&mut self, node_id: &str, prompt: &Prompt, options: &[Edge]) -> Option<String>;

    /// Renders a terminal node. No options are offered; `value` is the
    /// leaf's terminal value (JSON null when absent).
    fn show_terminal(&mut self, node_id: &str, prompt: &Prompt, value: &serde_json::Value);

    /// Renders the fallback view for an identifier that resolves to no node.
    fn show_missing(&mut self, node_id: &str);
}

/// What a [`ScriptedAdapter`] was asked to render, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    /// A non-terminal node with its option targets, in option order.
    Prompt {
        node_id: String,
        option_targets: Vec<String>,
    },
    /// A terminal node with its value.
    Terminal {
        node_id: String,
        value: serde_json::Value,
    },
    /// The fallback view for a missing node.
    Missing { node_id: String },
}

/// Adapter that answers from a pre-programmed queue of edge targets.
///
/// When the queue runs dry it declines to choose, ending the run without a
/// completion. Everything rendered is recorded in [`shown`](Self::shown) so
/// tests can assert on the exact render sequence.
#[derive(Debug, Default)]
pub struct ScriptedAdapter {
    choices: VecDeque<String>,
    shown: Vec<Shown>,
}

impl ScriptedAdapter {
    /// Builds an adapter that will answer with `choices` in order.
    pub fn new(choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            shown: Vec::new(),
        }
    }

    /// Everything this adapter was asked to render, in order.
    pub fn shown(&self) -> &[Shown] {
        &self.shown
    }
}

impl PresentationAdapter for ScriptedAdapter {
    fn select(&mut self, node_id: &str, _prompt: &Prompt, options: &[Edge]) -> Option<String> {
        self.shown.push(Shown::Prompt {
            node_id: node_id.to_string(),
            option_targets: options.iter().map(|edge| edge.target.clone()).collect(),
        });
        self.choices.pop_front()
    }

    fn show_terminal(&mut self, node_id: &str, _prompt: &Prompt, value: &serde_json::Value) {
        self.shown.push(Shown::Terminal {
            node_id: node_id.to_string(),
            value: value.clone(),
        });
    }

    fn show_missing(&mut self, node_id: &str) {
        self.shown.push(Shown::Missing {
            node_id: node_id.to_string(),
        });
    }
}
