//! Shared fixtures for traversal integration tests: graph builders and a
//! recording completion handler.
//!
//! Used by the select_edge, completion, missing, reset, and run_loop modules.

use std::sync::{Arc, Mutex};

use helptree::{Completion, CompletionHandler, Edge, Graph, GraphNode, Prompt};

/// The two-question yes/no graph: A branches to leaves B ("BVal") and
/// C ("CVal").
pub fn yes_no_graph() -> Graph {
    let mut graph = Graph::new("A");
    graph
        .add_node(
            "A",
            GraphNode::branch(
                Prompt::text("Q1"),
                vec![Edge::new("B", "Yes"), Edge::new("C", "No")],
            ),
        )
        .add_node(
            "B",
            GraphNode::leaf(Prompt::text("Leaf-B"), Some(serde_json::json!("BVal"))),
        )
        .add_node(
            "C",
            GraphNode::leaf(Prompt::text("Leaf-C"), Some(serde_json::json!("CVal"))),
        );
    graph
}

/// A graph whose only node is a terminal root.
pub fn leaf_root_graph() -> Graph {
    let mut graph = Graph::new("root");
    graph.add_node(
        "root",
        GraphNode::leaf(Prompt::text("done"), Some(serde_json::json!("RootVal"))),
    );
    graph
}

/// Handler that appends every completion it sees to a shared vector.
pub struct RecordingHandler {
    seen: Arc<Mutex<Vec<Completion>>>,
}

impl RecordingHandler {
    /// Returns the handler and the shared record it writes into.
    pub fn new() -> (Arc<Self>, Arc<Mutex<Vec<Completion>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handler = Arc::new(Self { seen: seen.clone() });
        (handler, seen)
    }
}

impl CompletionHandler for RecordingHandler {
    fn on_complete(&self, completion: &Completion) {
        self.seen.lock().unwrap().push(completion.clone());
    }
}
