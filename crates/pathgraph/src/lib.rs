//! # pathgraph
//!
//! A generic directed multigraph and a deterministic shortest weighted path
//! engine built on Dijkstra's algorithm.
//!
//! ## Core Principles
//!
//! - **Append-only storage**: Nodes and edges are added, never removed
//! - **Triple identity**: An edge is its `(from, to, label)`; re-adding one is a no-op
//! - **Narrow search interface**: Path search needs only [`OutgoingEdges`]
//! - **Reproducible answers**: Equal-cost ties break on node label
//!
//! ## Architecture
//!
//! ```text
//! Callers (loaders, route queries, script drivers)
//!     ↓
//! Path (start + cumulative-cost steps)
//!     ↓
//! shortest_weighted_path (Dijkstra over OutgoingEdges)
//!     ↓
//! Graph (nodes → outgoing edge lists)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pathgraph::{Graph, Path};
//!
//! let mut graph = Graph::from_nodes(["A", "B", "C"]);
//! graph.add_edge("A", "B", 1.0).unwrap();
//! graph.add_edge("B", "C", 2.0).unwrap();
//! graph.add_edge("A", "C", 5.0).unwrap();
//!
//! let edges = graph.shortest_weighted_path(&"A", &"C").unwrap();
//! let path = Path::from_edges("A", &edges).unwrap();
//! assert_eq!(path.cost(), 3.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod path;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::algorithms::{path_cost, shortest_weighted_path};
pub use graph::{Edge, Graph, OutgoingEdges, Weight};
pub use path::{Path, Step};
