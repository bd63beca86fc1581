//! helptree: a decision-tree traversal engine.
//!
//! The engine walks a caller-supplied directed graph of prompts and labeled
//! options. A [`Session`] owns the graph and the current position, advances on
//! edge-selection events, resets to the root on demand, and reports a
//! [`Completion`] exactly once per distinct entry into a leaf node.
//!
//! The engine is synchronous and single-threaded: every transition happens
//! inside the call that requested it, and the caller reads back the new
//! [`Step`] (what to render plus any emitted completion). Rendering itself is
//! behind the [`PresentationAdapter`] seam; the engine never draws anything.
//!
//! - `graph`: the immutable graph model ([`Graph`], [`GraphNode`], [`Edge`],
//!   [`Prompt`]) and the explicit [`Resolution`] lookup result.
//! - `traversal`: the state machine ([`TraversalState`], [`Session`]) and the
//!   completion notifier.
//! - `adapter`: the rendering contract and a scripted adapter for tests and
//!   examples.

pub mod adapter;
pub mod error;
pub mod graph;
pub mod traversal;

pub use adapter::{PresentationAdapter, ScriptedAdapter, Shown};
pub use error::{GraphError, TraversalError};
pub use graph::{Edge, Graph, GraphNode, Prompt, Resolution};
pub use traversal::{
    Completion, CompletionHandler, Session, Step, TraversalState, View,
};
