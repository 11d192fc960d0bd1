//! Unit tests for Path construction and its serialized form.

use pathgraph::{Edge, Graph, GraphError, Path};
use serde_json::json;

#[test]
fn test_path_from_search_result() {
    let mut graph = Graph::from_nodes(["A", "B", "C"]);
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("B", "C", 2.0).unwrap();

    let edges = graph.shortest_weighted_path(&"A", &"C").unwrap();
    let path = Path::from_edges("A", &edges).unwrap();

    assert_eq!(*path.start(), "A");
    assert_eq!(*path.end(), "C");
    assert_eq!(path.len(), 2);
    assert_eq!(path.cost(), 3.0);
}

#[test]
fn test_path_from_empty_edges_stays_at_start() {
    let edges: Vec<Edge<&str, f64>> = Vec::new();
    let path = Path::from_edges("A", &edges).unwrap();
    assert!(path.is_empty());
    assert_eq!(*path.end(), "A");
}

#[test]
fn test_path_must_begin_at_start() {
    let edges = vec![Edge::new("B", "C", 1.0)];
    let err = Path::from_edges("A", &edges).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
}

#[test]
fn test_path_serializes_cumulative_steps() {
    let path = Path::new("A").extend("B", 1.0).extend("C", 2.5);
    let value = serde_json::to_value(&path).unwrap();

    assert_eq!(
        value,
        json!({
            "start": "A",
            "cost": 3.5,
            "steps": [
                { "location": "B", "cost": 1.0 },
                { "location": "C", "cost": 3.5 },
            ],
        })
    );
}

#[test]
fn test_path_deserializes() {
    let text = r#"{"start":"A","cost":2.0,"steps":[{"location":"B","cost":2.0}]}"#;
    let path: Path<String, f64> = serde_json::from_str(text).unwrap();
    assert_eq!(path.end(), "B");
    assert_eq!(path.cost(), 2.0);
}
