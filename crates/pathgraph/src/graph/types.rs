//! Core graph types: edges and the outgoing-edge capability.

use serde::{Deserialize, Serialize};

/// A directed, labeled edge.
///
/// Edge identity is the full `(from, to, label)` triple: two edges between the
/// same ordered pair of nodes are distinct as long as their labels differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<N, E> {
    /// Source node
    pub from: N,
    /// Destination node
    pub to: N,
    /// Edge payload (a distance for weighted graphs)
    pub label: E,
}

impl<N, E> Edge<N, E> {
    /// Create a new edge.
    ///
    /// Endpoints are not checked against any graph here; [`Graph::add_edge`]
    /// does that on insertion.
    ///
    /// [`Graph::add_edge`]: crate::Graph::add_edge
    pub fn new(from: N, to: N, label: E) -> Self {
        Self { from, to, label }
    }

    /// Source node of the edge.
    pub fn from(&self) -> &N {
        &self.from
    }

    /// Destination node of the edge.
    pub fn to(&self) -> &N {
        &self.to
    }

    /// Payload stored on the edge.
    pub fn label(&self) -> &E {
        &self.label
    }
}

/// Read-only view over a graph that can enumerate a node's outgoing edges.
///
/// This is the only capability [`shortest_weighted_path`] needs, so any backing
/// (adjacency lists, a dense matrix, a filtered view) can be searched without
/// implementing the full [`Graph`] mutation API.
///
/// Implementations return an empty iterator for a node they do not contain.
///
/// [`shortest_weighted_path`]: crate::shortest_weighted_path
/// [`Graph`]: crate::Graph
pub trait OutgoingEdges<N, E> {
    /// Iterator over borrowed outgoing edges.
    type Iter<'a>: Iterator<Item = &'a Edge<N, E>>
    where
        Self: 'a,
        N: 'a,
        E: 'a;

    /// Enumerate the edges whose source is `node`.
    fn outgoing_edges<'a>(&'a self, node: &N) -> Self::Iter<'a>;
}
