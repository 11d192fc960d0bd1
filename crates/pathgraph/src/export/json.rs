//! JSON snapshot export.
//!
//! Nodes are written in sorted order and edges grouped by sorted source node,
//! each group in insertion order, so the same graph always exports to the same
//! text.

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph};
use serde::Serialize;
use std::fmt;
use std::hash::Hash;

#[derive(Serialize)]
struct Snapshot<'a, N, E> {
    nodes: Vec<&'a N>,
    edges: Vec<&'a Edge<N, E>>,
}

/// Export the whole graph as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if a node or label fails to
/// serialize. Non-finite `f64` weights are written as `null`.
pub fn export_json<N, E>(graph: &Graph<N, E>) -> Result<String>
where
    N: Eq + Hash + Ord + Clone + fmt::Debug + Serialize,
    E: PartialEq + fmt::Debug + Serialize,
{
    let mut nodes: Vec<&N> = graph.nodes().collect();
    nodes.sort();

    let mut edges = Vec::with_capacity(graph.edge_count());
    for node in &nodes {
        edges.extend(graph.outgoing_edges_from(node)?);
    }

    let snapshot = Snapshot { nodes, edges };
    serde_json::to_string_pretty(&snapshot)
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}
