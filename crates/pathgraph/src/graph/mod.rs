//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Edge`]: A directed, labeled connection between two nodes
//! - [`Graph`]: The mutable multigraph container
//! - [`OutgoingEdges`]: The read-only capability path search runs against
//! - [`Weight`]: Edge labels that can be summed and ordered

mod multigraph;
mod types;
mod weight;
pub mod algorithms;

pub use multigraph::Graph;
pub use types::{Edge, OutgoingEdges};
pub use weight::Weight;
