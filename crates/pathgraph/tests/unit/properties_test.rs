//! Property-based tests for graph invariants and path optimality.

use pathgraph::{path_cost, Graph};
use proptest::prelude::*;
use std::collections::HashSet;

type Triple = (u8, u8, u32);

fn arb_graph() -> impl Strategy<Value = (Vec<u8>, Vec<Triple>)> {
    (1u8..7).prop_flat_map(|size| {
        (
            prop::collection::vec(0..size, 1..12),
            prop::collection::vec((0..size, 0..size, 0u32..10), 0..24),
        )
    })
}

fn build(nodes: &[u8], triples: &[Triple]) -> Graph<u8, u32> {
    let mut graph = Graph::new();
    for node in nodes {
        graph.add_node(*node);
    }
    for (from, to, weight) in triples {
        graph.add_node(*from);
        graph.add_node(*to);
        graph.add_edge(*from, *to, *weight).unwrap();
    }
    graph
}

/// Cheapest cost over every simple path, found by exhaustive search.
fn brute_force_cost(graph: &Graph<u8, u32>, start: u8, end: u8) -> Option<u32> {
    fn walk(
        graph: &Graph<u8, u32>,
        current: u8,
        end: u8,
        cost: u32,
        seen: &mut HashSet<u8>,
        best: &mut Option<u32>,
    ) {
        if current == end {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for edge in graph.outgoing_edges_from(&current).unwrap() {
            if seen.insert(edge.to) {
                walk(graph, edge.to, end, cost + edge.label, seen, best);
                seen.remove(&edge.to);
            }
        }
    }

    let mut best = None;
    let mut seen = HashSet::from([start]);
    walk(graph, start, end, 0, &mut seen, &mut best);
    best
}

proptest! {
    #[test]
    fn prop_nodes_are_unique((nodes, triples) in arb_graph()) {
        let graph = build(&nodes, &triples);
        let expected: HashSet<u8> = nodes
            .iter()
            .copied()
            .chain(triples.iter().flat_map(|(a, b, _)| [*a, *b]))
            .collect();
        prop_assert_eq!(graph.node_count(), expected.len());
        prop_assert_eq!(graph.all_nodes().len(), expected.len());
    }

    #[test]
    fn prop_edge_insertion_is_idempotent((nodes, triples) in arb_graph()) {
        let mut graph = build(&nodes, &triples);
        let before = graph.all_edges().len();
        for (from, to, weight) in &triples {
            prop_assert!(!graph.add_edge(*from, *to, *weight).unwrap());
        }
        prop_assert_eq!(graph.all_edges().len(), before);

        let distinct: HashSet<Triple> = triples.iter().copied().collect();
        prop_assert_eq!(before, distinct.len());
    }

    #[test]
    fn prop_outgoing_edges_share_source((nodes, triples) in arb_graph()) {
        let graph = build(&nodes, &triples);
        for node in graph.nodes() {
            for edge in graph.outgoing_edges_from(node).unwrap() {
                prop_assert_eq!(edge.from, *node);
            }
        }
    }

    #[test]
    fn prop_sources_are_parents_of_destinations((nodes, triples) in arb_graph()) {
        let graph = build(&nodes, &triples);
        for (from, to, weight) in &triples {
            prop_assert!(graph.contains_edge(from, to, weight));
            prop_assert!(graph.parents(to).unwrap().contains(from));
        }
    }

    #[test]
    fn prop_dijkstra_matches_brute_force((nodes, triples) in arb_graph()) {
        let graph = build(&nodes, &triples);
        let all: Vec<u8> = graph.nodes().copied().collect();
        for &start in &all {
            for &end in &all {
                let found = graph.shortest_weighted_path(&start, &end);
                let expected = brute_force_cost(&graph, start, end);
                prop_assert_eq!(found.as_ref().map(|edges| path_cost(edges)), expected);

                if let Some(edges) = found {
                    let mut at = start;
                    for edge in &edges {
                        prop_assert_eq!(edge.from, at);
                        prop_assert!(graph.contains_edge(&edge.from, &edge.to, &edge.label));
                        at = edge.to;
                    }
                    prop_assert_eq!(at, end);
                }
            }
        }
    }

    #[test]
    fn prop_trivial_path_is_empty((nodes, triples) in arb_graph()) {
        let graph = build(&nodes, &triples);
        for node in graph.nodes() {
            prop_assert_eq!(graph.shortest_weighted_path(node, node), Some(vec![]));
        }
    }
}
