//! Mutable directed multigraph keyed by caller-supplied node labels.

use super::types::{Edge, OutgoingEdges};
use super::Weight;
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// A directed, labeled multigraph.
///
/// `Graph` maps every node to the ordered list of its outgoing edges. Nodes are
/// unique, every edge stored under a node has that node as its source, and no
/// bucket holds two edges with the same `(from, to, label)` triple.
///
/// The graph is append-only: there are no removal operations. It has no
/// internal locking; share it across threads only behind external
/// synchronization once mutation has finished.
#[derive(Clone)]
pub struct Graph<N, E> {
    adjacency: HashMap<N, Vec<Edge<N, E>>>,
}

impl<N, E> Graph<N, E>
where
    N: Eq + Hash + Clone + fmt::Debug,
    E: PartialEq + fmt::Debug,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Pre-allocate for a known number of nodes.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(node_count),
        }
    }

    /// Create a graph containing the given nodes and no edges.
    ///
    /// Repeated nodes in the input collapse into one.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// Add a node if it is not already present.
    ///
    /// # Returns
    ///
    /// `true` if the node was inserted, `false` if it already existed (no-op).
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            trace!("Node {node:?} already present");
            return false;
        }
        debug!("Adding node: {node:?}");
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Add a directed edge from `from` to `to` carrying `label`.
    ///
    /// Inserting a triple that already exists is a no-op. Edges between the same
    /// pair of nodes with different labels are all kept.
    ///
    /// # Returns
    ///
    /// `true` if a new edge was appended, `false` if the identical edge existed.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NodeNotFound`] if either endpoint is not in the graph.
    /// - [`GraphError::InvalidArgument`] if both endpoints exist but `label`
    ///   does not compare equal to itself (a NaN weight), since such an edge
    ///   could never be de-duplicated.
    pub fn add_edge(&mut self, from: N, to: N, label: E) -> Result<bool> {
        for endpoint in [&from, &to] {
            if !self.adjacency.contains_key(endpoint) {
                return Err(GraphError::node_not_found(endpoint));
            }
        }
        if !is_self_equal(&label) {
            return Err(GraphError::InvalidArgument {
                message: format!("edge label {label:?} is not equal to itself"),
            });
        }
        let bucket = self
            .adjacency
            .get_mut(&from)
            .ok_or_else(|| GraphError::node_not_found(&from))?;

        if bucket.iter().any(|e| e.to == to && e.label == label) {
            trace!("Edge {from:?} -> {to:?} ({label:?}) already present");
            return Ok(false);
        }

        debug!("Adding edge: {from:?} -> {to:?} ({label:?})");
        bucket.push(Edge::new(from.clone(), to, label));

        #[cfg(debug_assertions)]
        self.check_rep(&from);

        Ok(true)
    }

    /// True if `node` is in the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// True if the exact `(from, to, label)` edge is in the graph.
    ///
    /// Absent endpoints simply yield `false`.
    pub fn contains_edge(&self, from: &N, to: &N, label: &E) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|bucket| bucket.iter().any(|e| &e.to == to && &e.label == label))
    }

    /// Edges leaving `node`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not in the graph.
    pub fn outgoing_edges_from(&self, node: &N) -> Result<&[Edge<N, E>]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// Edges anywhere in the graph whose destination is `node`.
    ///
    /// Storage is indexed by source only, so this scans every edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not in the graph.
    pub fn incoming_edges_to(&self, node: &N) -> Result<Vec<&Edge<N, E>>> {
        if !self.contains_node(node) {
            return Err(GraphError::node_not_found(node));
        }
        Ok(self.edges().filter(|e| &e.to == node).collect())
    }

    /// Distinct source nodes of the edges pointing at `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `node` is not in the graph.
    pub fn parents(&self, node: &N) -> Result<HashSet<&N>> {
        Ok(self
            .incoming_edges_to(node)?
            .into_iter()
            .map(|e| &e.from)
            .collect())
    }

    /// Snapshot of every node in the graph. No order is implied.
    pub fn all_nodes(&self) -> HashSet<&N> {
        self.adjacency.keys().collect()
    }

    /// Snapshot of every edge in the graph.
    ///
    /// Edges are unique by construction. Order is grouped by source node, with
    /// each group in insertion order; the order of the groups is unspecified.
    pub fn all_edges(&self) -> Vec<&Edge<N, E>> {
        self.edges().collect()
    }

    /// Iterate over the nodes without collecting them.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Iterate over the edges without collecting them.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N, E>> {
        self.adjacency.values().flatten()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    // Node uniqueness is guaranteed by the map; only the touched bucket can change.
    #[cfg(debug_assertions)]
    fn check_rep(&self, node: &N) {
        let Some(bucket) = self.adjacency.get(node) else {
            return;
        };
        for (i, edge) in bucket.iter().enumerate() {
            debug_assert!(&edge.from == node, "edge {edge:?} stored under {node:?}");
            debug_assert!(
                self.adjacency.contains_key(&edge.to),
                "edge {edge:?} points at a missing node"
            );
            debug_assert!(
                !bucket[i + 1..].contains(edge),
                "duplicate edge {edge:?} under {node:?}"
            );
        }
    }
}

impl<N, W> Graph<N, W>
where
    N: Ord + Hash + Clone + fmt::Debug,
    W: Weight + PartialEq,
{
    /// Find the cheapest path between two nodes of this graph.
    ///
    /// See [`shortest_weighted_path`](super::algorithms::shortest_weighted_path)
    /// for the full contract. Callers should check membership of both nodes
    /// first: an absent `start` simply reaches nothing.
    pub fn shortest_weighted_path(&self, start: &N, end: &N) -> Option<Vec<Edge<N, W>>> {
        super::algorithms::shortest_weighted_path(self, start, end)
    }
}

#[allow(clippy::eq_op)]
fn is_self_equal<E: PartialEq>(label: &E) -> bool {
    label == label
}

impl<N, E> Default for Graph<N, E>
where
    N: Eq + Hash + Clone + fmt::Debug,
    E: PartialEq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> fmt::Debug for Graph<N, E>
where
    N: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.adjacency.iter()).finish()
    }
}

impl<N, E> OutgoingEdges<N, E> for Graph<N, E>
where
    N: Eq + Hash,
{
    type Iter<'a> = std::slice::Iter<'a, Edge<N, E>>
    where
        Self: 'a,
        N: 'a,
        E: 'a;

    fn outgoing_edges<'a>(&'a self, node: &N) -> Self::Iter<'a> {
        match self.adjacency.get(node) {
            Some(bucket) => bucket.iter(),
            None => {
                let empty: &'a [Edge<N, E>] = &[];
                empty.iter()
            }
        }
    }
}
