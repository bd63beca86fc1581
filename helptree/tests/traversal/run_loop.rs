//! Session::run with the scripted adapter: the full render/select loop.

use helptree::{Graph, ScriptedAdapter, Session, Shown, TraversalError};

use crate::common::yes_no_graph;

/// **Scenario**: a scripted walk A → B renders the prompt once, then the
/// terminal, and returns the completion.
#[test]
fn run_walks_to_terminal() {
    let mut session = Session::new(yes_no_graph());
    let mut adapter = ScriptedAdapter::new(["B"]);

    let completion = session.run(&mut adapter).unwrap().expect("ends on leaf");
    assert_eq!(completion.node_id, "B");
    assert_eq!(completion.value, serde_json::json!("BVal"));

    assert_eq!(
        adapter.shown(),
        &[
            Shown::Prompt {
                node_id: "A".to_string(),
                option_targets: vec!["B".to_string(), "C".to_string()],
            },
            Shown::Terminal {
                node_id: "B".to_string(),
                value: serde_json::json!("BVal"),
            },
        ]
    );
}

/// **Scenario**: an adapter with no answers stops the run without a
/// completion; no terminal or fallback view is rendered.
#[test]
fn run_stops_when_adapter_declines() {
    let mut session = Session::new(yes_no_graph());
    let mut adapter = ScriptedAdapter::new(Vec::<String>::new());

    let outcome = session.run(&mut adapter).unwrap();
    assert!(outcome.is_none());
    assert_eq!(adapter.shown().len(), 1);
    assert_eq!(session.current_id(), "A");
}

/// **Scenario**: a missing root renders the fallback view and ends without a
/// completion.
#[test]
fn run_renders_fallback_for_missing_root() {
    let mut session = Session::new(Graph::new("Z"));
    let mut adapter = ScriptedAdapter::new(Vec::<String>::new());

    let outcome = session.run(&mut adapter).unwrap();
    assert!(outcome.is_none());
    assert_eq!(
        adapter.shown(),
        &[Shown::Missing {
            node_id: "Z".to_string()
        }]
    );
}

/// **Scenario**: an adapter answering with an unoffered target surfaces as
/// InvalidEdge from the run loop.
#[test]
fn run_propagates_invalid_adapter_choice() {
    let mut session = Session::new(yes_no_graph());
    let mut adapter = ScriptedAdapter::new(["nonsense"]);

    match session.run(&mut adapter) {
        Err(TraversalError::InvalidEdge { from, target }) => {
            assert_eq!(from, "A");
            assert_eq!(target, "nonsense");
        }
        other => panic!("expected InvalidEdge, got {:?}", other),
    }
}

/// **Scenario**: running again after a completed walk re-renders the terminal
/// but does not emit a second completion for the same entry.
#[test]
fn rerun_on_same_terminal_entry_does_not_refire() {
    let mut session = Session::new(yes_no_graph());

    let mut adapter = ScriptedAdapter::new(["C"]);
    let first = session.run(&mut adapter).unwrap();
    assert!(first.is_some());

    let mut again = ScriptedAdapter::new(Vec::<String>::new());
    let second = session.run(&mut again).unwrap();
    assert!(second.is_none(), "same entry must not re-emit");
    assert!(matches!(again.shown()[0], Shown::Terminal { .. }));
}
