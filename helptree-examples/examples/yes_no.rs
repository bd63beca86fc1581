//! Minimal walk: a one-question tree driven by the scripted adapter.
//!
//! Run with: `cargo run -p helptree-examples --example yes_no`

use std::sync::Arc;

use helptree::{
    Completion, CompletionHandler, Edge, Graph, GraphNode, Prompt, ScriptedAdapter, Session,
};

struct PrintHandler;

impl CompletionHandler for PrintHandler {
    fn on_complete(&self, completion: &Completion) {
        println!("completed at {} with {}", completion.node_id, completion.value);
    }
}

fn main() {
    let mut graph = Graph::new("A");
    graph
        .add_node(
            "A",
            GraphNode::branch(
                Prompt::text("Is the pilot light on?"),
                vec![Edge::new("B", "Yes"), Edge::new("C", "No")],
            ),
        )
        .add_node(
            "B",
            GraphNode::leaf(
                Prompt::text("No action needed."),
                Some(serde_json::json!("ok")),
            ),
        )
        .add_node(
            "C",
            GraphNode::leaf(
                Prompt::text("Call the service line."),
                Some(serde_json::json!("service-call")),
            ),
        );

    let mut session = Session::new(graph);
    session.on_complete(Arc::new(PrintHandler));

    // Scripted answer: "No" (edge to C).
    let mut adapter = ScriptedAdapter::new(["C"]);
    let outcome = session.run(&mut adapter).expect("valid scripted choices");
    println!("run returned: {:?}", outcome.map(|c| c.value));
}
