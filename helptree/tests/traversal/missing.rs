//! Missing-node resolution: a degenerate state, never an error and never a
//! completion.

use helptree::{Graph, Resolution, Session, View};

use crate::common::RecordingHandler;

/// **Scenario** (literal): a graph with root "Z" and no node "Z" resolves to
/// Missing; no notification fires.
#[test]
fn missing_root_resolves_missing_without_notification() {
    let graph = Graph::new("Z");
    assert!(matches!(graph.root(), Resolution::Missing));

    let (handler, seen) = RecordingHandler::new();
    let mut session = Session::new(graph);
    session.on_complete(handler);

    let step = session.evaluate();
    assert!(matches!(step.view, View::Missing { ref node_id } if node_id == "Z"));
    assert!(step.completion.is_none());

    // Repeated evaluation stays Missing and still emits nothing.
    let step = session.evaluate();
    assert!(step.completion.is_none());
    assert!(seen.lock().unwrap().is_empty());
}

/// **Scenario**: selecting from a missing node is a precondition violation,
/// not a transition.
#[test]
fn select_edge_from_missing_is_invalid() {
    let mut session = Session::new(Graph::new("Z"));
    assert!(session.select_edge("anywhere").is_err());
    assert_eq!(session.current_id(), "Z");
}
