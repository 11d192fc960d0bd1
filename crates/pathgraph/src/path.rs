//! Paths assembled from shortest-path results.
//!
//! A [`Path`] starts at a node and records every location reached along the
//! way together with the running cost to get there. This is the shape route
//! responses are serialized in.

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One stop on a path: the node reached and the cumulative cost up to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<N, W> {
    /// Node reached by this step
    pub location: N,
    /// Total cost from the path's start to `location`
    pub cost: W,
}

/// A walk through a graph with its accumulated cost.
///
/// Paths are built by extension: each [`Path::extend`] appends a location and
/// adds the traversed weight to the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path<N, W> {
    start: N,
    cost: W,
    steps: Vec<Step<N, W>>,
}

impl<N, W: Weight> Path<N, W> {
    /// A zero-length path sitting at `start`.
    pub fn new(start: N) -> Self {
        Self {
            start,
            cost: W::zero(),
            steps: Vec::new(),
        }
    }

    /// Return this path extended to `location` over an edge of `weight`.
    #[must_use]
    pub fn extend(mut self, location: N, weight: W) -> Self {
        self.cost = self.cost.add_weight(weight);
        self.steps.push(Step {
            location,
            cost: self.cost,
        });
        self
    }

    /// Node the path begins at.
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Node the path ends at (the start, for an empty path).
    pub fn end(&self) -> &N {
        self.steps.last().map_or(&self.start, |step| &step.location)
    }

    /// Total cost of the path.
    pub fn cost(&self) -> W {
        self.cost
    }

    /// Steps in traversal order.
    pub fn steps(&self) -> &[Step<N, W>] {
        &self.steps
    }

    /// Number of edges walked.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the path has not left its start.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<N, W> Path<N, W>
where
    N: PartialEq + Clone + fmt::Debug,
    W: Weight,
{
    /// Build a path from `start` along a sequence of edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if an edge does not begin where
    /// the previous one ended (the first edge must begin at `start`).
    pub fn from_edges<'a, I>(start: N, edges: I) -> Result<Self>
    where
        N: 'a,
        W: 'a,
        I: IntoIterator<Item = &'a Edge<N, W>>,
    {
        let mut path = Self::new(start);
        for edge in edges {
            if &edge.from != path.end() {
                return Err(GraphError::InvalidArgument {
                    message: format!(
                        "edge {:?} -> {:?} does not continue a path ending at {:?}",
                        edge.from,
                        edge.to,
                        path.end()
                    ),
                });
            }
            path = path.extend(edge.to.clone(), edge.label);
        }
        Ok(path)
    }
}
