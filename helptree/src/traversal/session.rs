//! Traversal session: owns one graph plus one state, processes events.
//!
//! Every public operation is synchronous: the transition happens inside the
//! call and the caller reads back a [`Step`] describing what to render plus
//! any completion emitted by that transition. There is no reactive side
//! channel; embedders that had a reset token simply call [`Session::reset`]
//! when it changes.

use std::sync::Arc;

use crate::adapter::PresentationAdapter;
use crate::error::TraversalError;
use crate::graph::{Edge, Graph, Prompt, Resolution};

use super::logging::{log_completion, log_missing, log_reset, log_select_edge, log_session_start};
use super::notify::CompletionTracker;
use super::state::TraversalState;
use super::{Completion, CompletionHandler};

/// What the presentation adapter should render for the current position.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Non-terminal node: show the prompt and offer the options.
    Prompt {
        node_id: String,
        prompt: Prompt,
        options: Vec<Edge>,
    },
    /// Terminal node: show the prompt and outcome value, offer no options.
    Terminal {
        node_id: String,
        prompt: Prompt,
        /// The leaf's terminal value (JSON null when absent). Carried on the
        /// view so rendering does not depend on whether the completion
        /// freshly fired.
        value: serde_json::Value,
    },
    /// The current id resolves to no node: show the fallback view.
    Missing { node_id: String },
}

/// Result of one evaluation cycle: the view to render plus any completion
/// emitted by the transition that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// What to render.
    pub view: View,
    /// Completion emitted by this evaluation, when it entered a terminal node
    /// for the first time since the last transition.
    pub completion: Option<Completion>,
}

/// One traversal session: a graph, a position, and completion handlers.
///
/// The graph is treated as immutable for the session's lifetime. The session
/// is exclusively owned by its event source; all operations take `&mut self`
/// and complete before returning.
pub struct Session {
    graph: Graph,
    state: TraversalState,
    tracker: CompletionTracker,
    handlers: Vec<Arc<dyn CompletionHandler>>,
}

impl Session {
    /// Creates a session positioned at the graph's root.
    ///
    /// No evaluation happens yet; the first [`evaluate`](Session::evaluate)
    /// (or the run loop) resolves the root and, when the root is itself a
    /// leaf, emits its completion.
    pub fn new(graph: Graph) -> Self {
        log_session_start(&graph.root_id);
        let state = TraversalState::initialize(&graph);
        Self {
            graph,
            state,
            tracker: CompletionTracker::default(),
            handlers: Vec::new(),
        }
    }

    /// Registers a completion handler. Chainable; handlers run in
    /// registration order, synchronously, once per distinct terminal entry.
    pub fn on_complete(&mut self, handler: Arc<dyn CompletionHandler>) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    /// Resolves the current position and reports what to render.
    ///
    /// Entering a terminal node emits its completion exactly once: repeated
    /// evaluation without an intervening transition returns
    /// `completion: None`. Handlers observe the session only after the
    /// current id already holds the terminal identifier. A missing node
    /// never emits.
    pub fn evaluate(&mut self) -> Step {
        let node_id = self.state.current_id().to_string();
        match self.graph.resolve(&node_id) {
            Resolution::Found(node) if node.is_terminal() => {
                let value = node
                    .terminal_value
                    .clone()
                    .unwrap_or(serde_json::Value::Null);
                let prompt = node.prompt.clone();
                let completion = if self.tracker.try_fire() {
                    let completion = Completion::new(&node_id, node.terminal_value.clone());
                    log_completion(&completion);
                    for handler in &self.handlers {
                        handler.on_complete(&completion);
                    }
                    Some(completion)
                } else {
                    None
                };
                Step {
                    view: View::Terminal {
                        node_id,
                        prompt,
                        value,
                    },
                    completion,
                }
            }
            Resolution::Found(node) => Step {
                view: View::Prompt {
                    node_id,
                    prompt: node.prompt.clone(),
                    options: node.options.clone(),
                },
                completion: None,
            },
            Resolution::Missing => {
                log_missing(&node_id);
                Step {
                    view: View::Missing { node_id },
                    completion: None,
                }
            }
        }
    }

    /// Follows the edge to `target` and evaluates the new position.
    ///
    /// The target must be among the current node's options; anything else is
    /// a precondition violation ([`TraversalError::InvalidEdge`]), including
    /// selection from a leaf or from a missing node. The adapter only offers
    /// valid edges, so violations indicate an integration bug.
    pub fn select_edge(&mut self, target: &str) -> Result<Step, TraversalError> {
        let from = self.state.current_id().to_string();
        let selectable = self
            .graph
            .resolve(&from)
            .found()
            .map(|node| node.options.iter().any(|edge| edge.target == target))
            .unwrap_or(false);
        if !selectable {
            return Err(TraversalError::InvalidEdge {
                from,
                target: target.to_string(),
            });
        }

        log_select_edge(&from, target);
        self.state.select_edge(target);
        self.tracker.on_transition();
        Ok(self.evaluate())
    }

    /// Returns to the graph's root and evaluates, regardless of the current
    /// position. Idempotent in terms of the resulting state.
    ///
    /// Reset counts as a transition: resetting onto a root that is itself a
    /// leaf is a new terminal entry and notifies again.
    pub fn reset(&mut self) -> Step {
        log_reset(&self.graph.root_id);
        self.state.reset(&self.graph);
        self.tracker.on_transition();
        self.evaluate()
    }

    /// Drives the session with an adapter until a terminal node, a missing
    /// node, or the adapter declining to choose.
    ///
    /// Returns the completion for a terminal end, `None` for the other two.
    /// An adapter returning a target that is not selectable surfaces as
    /// [`TraversalError::InvalidEdge`].
    pub fn run(
        &mut self,
        adapter: &mut dyn PresentationAdapter,
    ) -> Result<Option<Completion>, TraversalError> {
        let mut step = self.evaluate();
        loop {
            match step.view {
                View::Prompt {
                    ref node_id,
                    ref prompt,
                    ref options,
                } => match adapter.select(node_id, prompt, options) {
                    Some(target) => step = self.select_edge(&target)?,
                    None => return Ok(None),
                },
                View::Terminal {
                    ref node_id,
                    ref prompt,
                    ref value,
                } => {
                    adapter.show_terminal(node_id, prompt, value);
                    return Ok(step.completion);
                }
                View::Missing { ref node_id } => {
                    adapter.show_missing(node_id);
                    return Ok(None);
                }
            }
        }
    }

    /// The graph this session walks.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The bare traversal state (current id).
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// The identifier the session is currently at.
    pub fn current_id(&self) -> &str {
        self.state.current_id()
    }
}
