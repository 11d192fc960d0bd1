//! Unit tests for shortest weighted path search.
//!
//! Tests cover:
//! - Cheaper multi-hop paths over direct edges
//! - Parallel edges (multigraph) selection
//! - Trivial and unreachable queries
//! - Search over a non-`Graph` backing through `OutgoingEdges`

use pathgraph::{path_cost, shortest_weighted_path, Edge, Graph, OutgoingEdges, Path};

fn triangle() -> Graph<&'static str, f64> {
    let mut graph = Graph::from_nodes(["A", "B", "C"]);
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("B", "C", 2.0).unwrap();
    graph.add_edge("A", "C", 5.0).unwrap();
    graph
}

#[test]
fn test_prefers_cheaper_two_hop_path() {
    let graph = triangle();
    let edges = graph.shortest_weighted_path(&"A", &"C").unwrap();

    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0], Edge::new("A", "B", 1.0));
    assert_eq!(edges[1], Edge::new("B", "C", 2.0));
    assert_eq!(path_cost(&edges), 3.0);
}

#[test]
fn test_parallel_edges_pick_lightest() {
    let mut graph = Graph::from_nodes(["A", "B"]);
    graph.add_edge("A", "B", 4.0).unwrap();
    graph.add_edge("A", "B", 1.0).unwrap();

    let edges = graph.shortest_weighted_path(&"A", &"B").unwrap();
    assert_eq!(edges, vec![Edge::new("A", "B", 1.0)]);
}

#[test]
fn test_trivial_path_is_empty() {
    let graph = triangle();
    for node in ["A", "B", "C"] {
        assert_eq!(graph.shortest_weighted_path(&node, &node), Some(vec![]));
    }
}

#[test]
fn test_disconnected_components_report_no_path() {
    let mut graph = triangle();
    graph.add_node("X");
    graph.add_node("Y");
    graph.add_edge("X", "Y", 1.0).unwrap();

    assert_eq!(graph.shortest_weighted_path(&"A", &"Y"), None);
    assert_eq!(graph.shortest_weighted_path(&"Y", &"X"), None);
}

#[test]
fn test_absent_start_reaches_nothing() {
    let graph = triangle();
    assert_eq!(graph.shortest_weighted_path(&"Z", &"A"), None);
}

#[test]
fn test_self_loops_and_cycles_terminate() {
    let mut graph = Graph::from_nodes(["A", "B", "C", "D"]);
    graph.add_edge("A", "A", 0.0).unwrap();
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("B", "A", 1.0).unwrap();
    graph.add_edge("B", "C", 1.0).unwrap();
    graph.add_edge("C", "A", 1.0).unwrap();

    let edges = graph.shortest_weighted_path(&"A", &"C").unwrap();
    assert_eq!(path_cost(&edges), 2.0);
    assert_eq!(graph.shortest_weighted_path(&"A", &"D"), None);
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = Graph::from_nodes([1u32, 2, 3]);
    graph.add_edge(1, 2, 0u64).unwrap();
    graph.add_edge(2, 3, 0).unwrap();
    graph.add_edge(1, 3, 1).unwrap();

    let edges = graph.shortest_weighted_path(&1, &3).unwrap();
    assert_eq!(path_cost(&edges), 0);
    assert_eq!(edges.len(), 2);
}

#[test]
fn test_longer_hop_count_can_be_cheaper() {
    let mut graph = Graph::from_nodes(["S", "A", "B", "C", "T"]);
    graph.add_edge("S", "T", 10.0).unwrap();
    graph.add_edge("S", "A", 2.0).unwrap();
    graph.add_edge("A", "B", 2.0).unwrap();
    graph.add_edge("B", "C", 2.0).unwrap();
    graph.add_edge("C", "T", 2.0).unwrap();

    let edges = graph.shortest_weighted_path(&"S", &"T").unwrap();
    let path = Path::from_edges("S", &edges).unwrap();
    assert_eq!(path.cost(), 8.0);
    let route: Vec<&str> = path.steps().iter().map(|step| step.location).collect();
    assert_eq!(route, vec!["A", "B", "C", "T"]);
}

#[test]
fn test_results_are_reproducible_on_ties() {
    let mut graph = Graph::from_nodes(["A", "B", "C", "D"]);
    graph.add_edge("A", "C", 1.0).unwrap();
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("C", "D", 1.0).unwrap();
    graph.add_edge("B", "D", 1.0).unwrap();

    let first = graph.shortest_weighted_path(&"A", &"D").unwrap();
    for _ in 0..10 {
        let clone = graph.clone();
        assert_eq!(clone.shortest_weighted_path(&"A", &"D").unwrap(), first);
    }
    assert_eq!(path_cost(&first), 2.0);
}

/// Dense adjacency-matrix backing with at most one edge per ordered pair.
struct DenseGraph {
    cells: Vec<Vec<Option<Edge<usize, u32>>>>,
}

impl DenseGraph {
    fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![None; size]; size],
        }
    }

    fn set(&mut self, from: usize, to: usize, weight: u32) {
        self.cells[from][to] = Some(Edge::new(from, to, weight));
    }
}

impl OutgoingEdges<usize, u32> for DenseGraph {
    type Iter<'a> = std::iter::Flatten<std::slice::Iter<'a, Option<Edge<usize, u32>>>>;

    fn outgoing_edges<'a>(&'a self, node: &usize) -> Self::Iter<'a> {
        let row: &'a [Option<Edge<usize, u32>>] = match self.cells.get(*node) {
            Some(row) => row,
            None => &[],
        };
        row.iter().flatten()
    }
}

#[test]
fn test_search_over_dense_backing() {
    let mut dense = DenseGraph::new(4);
    dense.set(0, 1, 7);
    dense.set(0, 2, 1);
    dense.set(2, 1, 2);
    dense.set(1, 3, 1);

    let edges = shortest_weighted_path(&dense, &0, &3).unwrap();
    let hops: Vec<(usize, usize)> = edges.iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(hops, vec![(0, 2), (2, 1), (1, 3)]);
    assert_eq!(path_cost(&edges), 4);

    assert_eq!(shortest_weighted_path(&dense, &3, &0), None);
    assert_eq!(shortest_weighted_path(&dense, &9, &0), None);
}

#[test]
fn test_large_integer_weights_do_not_overflow() {
    let mut graph = Graph::from_nodes(["A", "B", "C"]);
    graph.add_edge("A", "B", 200u8).unwrap();
    graph.add_edge("B", "C", 100).unwrap();

    let edges = graph.shortest_weighted_path(&"A", &"C").unwrap();
    assert_eq!(edges.len(), 2);
    let path = Path::from_edges("A", &edges).unwrap();
    assert_eq!(path.cost(), u8::MAX);
}
