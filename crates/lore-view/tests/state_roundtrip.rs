use lore_core::builder::GraphBuilder;
use lore_core::graph::{ConnectionRule, Graph, Node, NodeTypeSchema};
use lore_view::state::{self, ViewerState};
use lore_view::viewer::GraphViewer;
use serde_json::json;

fn chain_graph() -> Graph {
    GraphBuilder::new()
        .add_node_type(NodeTypeSchema::new("item").with_field("name", "text"))
        .unwrap()
        .add_connection_type(ConnectionRule::new("item", "item"))
        .unwrap()
        .add_node(Node::with_id("0", "item", json!({})))
        .unwrap()
        .add_node(Node::with_id("1", "item", json!({})))
        .unwrap()
        .add_node(Node::with_id("2", "item", json!({})))
        .unwrap()
        .add_node(Node::with_id("3", "item", json!({})))
        .unwrap()
        .add_connection("0", "1")
        .unwrap()
        .add_connection("1", "2")
        .unwrap()
        .add_connection("1", "3")
        .unwrap()
        .build()
}

#[test]
fn test_state_roundtrip_reproduces_visible_set() {
    let graph = chain_graph();
    let original = GraphViewer::new(&graph).reveal_nodes(["0", "1"]);

    let snapshot = state::to_json(original.state()).unwrap();
    let restored = GraphViewer::with_state(&graph, state::from_json(&snapshot).unwrap());

    let mut original_ids: Vec<&str> = original.visible_nodes().iter().map(|n| n.id.as_str()).collect();
    let mut restored_ids: Vec<&str> = restored.visible_nodes().iter().map(|n| n.id.as_str()).collect();
    original_ids.sort_unstable();
    restored_ids.sort_unstable();
    assert_eq!(original_ids, restored_ids);
    assert_eq!(original_ids, ["0", "1", "2", "3"]);
}

#[test]
fn test_snapshot_is_reproducible_regardless_of_reveal_order() {
    let forward = ViewerState::from_ids(["0", "1", "2"]);
    let backward = ViewerState::from_ids(["2", "1", "0"]);

    assert_eq!(forward, backward);
    assert_eq!(
        state::to_json(&forward).unwrap(),
        state::to_json(&backward).unwrap()
    );
}

#[test]
fn test_snapshot_wire_shape() {
    let snapshot = state::to_json(&ViewerState::from_ids(["1", "0"])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();

    assert_eq!(value["revealed"], json!(["0", "1"]));
}

#[test]
fn test_state_reveal_hide_algebra() {
    let state = ViewerState::new()
        .reveal(["0", "1", "2"])
        .hide(["1"])
        .reveal(["3"]);

    let revealed: Vec<&str> = state.revealed.iter().map(String::as_str).collect();
    assert_eq!(revealed, ["0", "2", "3"]);

    // hiding everything returns to empty
    let empty = state.hide(["0", "2", "3"]);
    assert!(empty.revealed.is_empty());
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(state::from_json("not json").is_err());
    assert!(state::from_json(r#"{"revealed": 7}"#).is_err());
}

#[test]
fn test_empty_state_roundtrip() {
    let graph = chain_graph();
    let snapshot = state::to_json(&ViewerState::new()).unwrap();
    let viewer = GraphViewer::with_state(&graph, state::from_json(&snapshot).unwrap());

    assert!(viewer.visible_nodes().is_empty());
}
