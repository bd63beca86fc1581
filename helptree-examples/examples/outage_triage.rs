//! A larger decision tree: outage triage for a utility customer, with a
//! mid-walk reset.
//!
//! Shows manual event-driven use of `Session` (evaluate / select_edge /
//! reset) instead of the adapter run loop.
//!
//! Run with: `cargo run -p helptree-examples --example outage_triage`

use helptree::{Edge, Graph, GraphNode, Prompt, Session, View};

fn triage_graph() -> Graph {
    let mut graph = Graph::new("start");
    graph
        .add_node(
            "start",
            GraphNode::branch(
                Prompt::text("Are your neighbors also without power?"),
                vec![
                    Edge::new("area", "Yes, the whole street"),
                    Edge::new("breaker", "No, just my home"),
                ],
            ),
        )
        .add_node(
            "area",
            GraphNode::leaf(
                Prompt::text("This looks like an area outage. We have been notified."),
                Some(serde_json::json!({"ticket": "area-outage"})),
            ),
        )
        .add_node(
            "breaker",
            GraphNode::branch(
                Prompt::text("Is your main breaker switched on?"),
                vec![
                    Edge::new("flip", "No / not sure"),
                    Edge::new("dispatch", "Yes, it is on"),
                ],
            ),
        )
        .add_node(
            "flip",
            GraphNode::leaf(
                Prompt::text("Flip the main breaker and wait one minute."),
                Some(serde_json::json!({"ticket": "self-service"})),
            ),
        )
        .add_node(
            "dispatch",
            GraphNode::leaf(
                Prompt::text("We will dispatch a technician."),
                Some(serde_json::json!({"ticket": "dispatch"})),
            ),
        );
    graph
}

fn describe(view: &View) -> String {
    match view {
        View::Prompt {
            node_id, options, ..
        } => format!("at {} with {} option(s)", node_id, options.len()),
        View::Terminal { node_id, value, .. } => format!("leaf {} -> {}", node_id, value),
        View::Missing { node_id } => format!("missing node {}", node_id),
    }
}

fn main() {
    let mut session = Session::new(triage_graph());

    let step = session.evaluate();
    println!("{}", describe(&step.view));

    // First walk: single-home outage, breaker already on.
    let step = session.select_edge("breaker").expect("offered edge");
    println!("{}", describe(&step.view));
    let step = session.select_edge("dispatch").expect("offered edge");
    println!("{}", describe(&step.view));
    if let Some(completion) = step.completion {
        println!("first outcome: {}", completion.value);
    }

    // The caller changed their mind: reset and take the area-outage branch.
    let step = session.reset();
    println!("after reset: {}", describe(&step.view));
    let step = session.select_edge("area").expect("offered edge");
    if let Some(completion) = step.completion {
        println!("second outcome: {}", completion.value);
    }
}
