//! Edge-selection transitions: valid moves land on the edge's target,
//! invalid selections are precondition violations.

use helptree::{Edge, Graph, GraphNode, Prompt, Session, TraversalError, View};

use crate::common::yes_no_graph;

/// **Scenario**: selecting an offered edge moves the state to the edge's
/// target, and resolution returns that node.
#[test]
fn select_edge_lands_on_target() {
    let mut session = Session::new(yes_no_graph());
    assert_eq!(session.current_id(), "A");

    let step = session.select_edge("B").unwrap();
    assert_eq!(session.current_id(), "B");
    assert!(matches!(step.view, View::Terminal { ref node_id, .. } if node_id == "B"));
}

/// **Scenario**: every edge of a non-leaf node is selectable and lands on its
/// own target (fresh session per edge).
#[test]
fn every_offered_edge_is_selectable() {
    let graph = yes_no_graph();
    let root = graph.resolve("A").found().unwrap();
    for edge in root.options.clone() {
        let mut session = Session::new(graph.clone());
        session.select_edge(&edge.target).unwrap();
        assert_eq!(session.current_id(), edge.target);
    }
}

/// **Scenario**: selecting a target not among the current node's options is
/// InvalidEdge; the state does not move.
#[test]
fn select_edge_rejects_unoffered_target() {
    let mut session = Session::new(yes_no_graph());

    match session.select_edge("C-but-wrong") {
        Err(TraversalError::InvalidEdge { from, target }) => {
            assert_eq!(from, "A");
            assert_eq!(target, "C-but-wrong");
        }
        other => panic!("expected InvalidEdge, got {:?}", other),
    }
    assert_eq!(session.current_id(), "A");
}

/// **Scenario**: a leaf offers no edge-selection transition; selecting from
/// it is InvalidEdge even when the target exists in the graph.
#[test]
fn select_edge_rejects_selection_from_leaf() {
    let mut session = Session::new(yes_no_graph());
    session.select_edge("B").unwrap();

    match session.select_edge("A") {
        Err(TraversalError::InvalidEdge { from, .. }) => assert_eq!(from, "B"),
        other => panic!("expected InvalidEdge, got {:?}", other),
    }
}

/// **Scenario**: selecting an offered edge whose target is absent from the
/// graph succeeds and lands on Missing; dangling targets are tolerated at
/// traversal time.
#[test]
fn select_edge_to_dangling_target_resolves_missing() {
    let mut graph = Graph::new("a");
    graph.add_node(
        "a",
        GraphNode::branch(Prompt::text("q"), vec![Edge::new("ghost", "Go")]),
    );

    let mut session = Session::new(graph);
    let step = session.select_edge("ghost").unwrap();
    assert!(matches!(step.view, View::Missing { ref node_id } if node_id == "ghost"));
    assert!(step.completion.is_none());
}
