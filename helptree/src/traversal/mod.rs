//! Traversal state machine: current position, transitions, completion.
//!
//! [`TraversalState`] is the bare pointer-in-graph for embedders that do their
//! own wiring; [`Session`] is the full engine: it owns a graph plus one
//! state, processes edge-selection and reset events synchronously, and routes
//! completions through registered handlers exactly once per terminal entry.

mod logging;
mod notify;
mod session;
mod state;

pub use notify::{Completion, CompletionHandler};
pub use session::{Session, Step, View};
pub use state::TraversalState;
