//! Shortest weighted path search.
//!
//! Dijkstra's algorithm over any [`OutgoingEdges`] view with non-negative
//! [`Weight`] labels. Search state lives entirely in the call, so one graph can
//! serve any number of queries as long as it is not mutated meanwhile.

use super::{Edge, OutgoingEdges, Weight};
use log::{debug, trace};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Frontier entry ordered by accumulated cost, then by node label.
///
/// The node label breaks cost ties so that equal-cost candidates are always
/// expanded in the same order and results are reproducible.
struct FrontierEntry<'a, N, W> {
    cost: W,
    node: &'a N,
}

impl<N: Ord, W: Weight> PartialEq for FrontierEntry<'_, N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord, W: Weight> Eq for FrontierEntry<'_, N, W> {}

impl<N: Ord, W: Weight> PartialOrd for FrontierEntry<'_, N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, W: Weight> Ord for FrontierEntry<'_, N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp_weight(&other.cost)
            .then_with(|| self.node.cmp(other.node))
    }
}

/// Find the minimum-total-weight path from `start` to `end`.
///
/// # Parameters
/// - `graph`: Any view that can enumerate outgoing edges
/// - `start`: Node the path begins at
/// - `end`: Node the path must reach
///
/// # Returns
/// - `Some(edges)`: the edges of a cheapest path, in traversal order. The first
///   edge leaves `start` and the last one arrives at `end`. When
///   `start == end` the path is empty.
/// - `None`: `end` is unreachable from `start`. A `start` the view does not
///   contain has no outgoing edges and therefore reaches nothing.
///
/// Parallel edges are relaxed independently, so the cheapest of them wins.
/// When several paths share the minimum cost, the one found first in
/// (cost, node label) expansion order is returned.
///
/// Weights must be non-negative; with negative weights the result is
/// unspecified. Integer costs saturate instead of overflowing, so paths whose
/// true cost exceeds the type's range all compare as the maximum.
pub fn shortest_weighted_path<'a, G, N, W>(
    graph: &'a G,
    start: &'a N,
    end: &N,
) -> Option<Vec<Edge<N, W>>>
where
    G: OutgoingEdges<N, W>,
    N: Ord + Hash + Clone + fmt::Debug + 'a,
    W: Weight + 'a,
{
    debug!("Searching shortest path: {start:?} -> {end:?}");
    if start == end {
        return Some(Vec::new());
    }

    let mut frontier = BinaryHeap::new();
    let mut best_cost: HashMap<&'a N, W> = HashMap::new();
    let mut arrived_by: HashMap<&'a N, &'a Edge<N, W>> = HashMap::new();
    let mut visited: HashSet<&'a N> = HashSet::new();

    best_cost.insert(start, W::zero());
    frontier.push(Reverse(FrontierEntry {
        cost: W::zero(),
        node: start,
    }));

    while let Some(Reverse(FrontierEntry { cost, node })) = frontier.pop() {
        if !visited.insert(node) {
            continue;
        }

        if node == end {
            debug!(
                "Reached {end:?} at cost {cost:?} after finalizing {} nodes",
                visited.len()
            );
            return Some(reconstruct(&arrived_by, start, node));
        }

        for edge in graph.outgoing_edges(node) {
            let next = &edge.to;
            if visited.contains(next) {
                continue;
            }

            let candidate = cost.add_weight(edge.label);
            let improves = best_cost
                .get(next)
                .map_or(true, |known| candidate.cmp_weight(known) == Ordering::Less);

            if improves {
                trace!("Relaxed {next:?} to {candidate:?} via {node:?}");
                best_cost.insert(next, candidate);
                arrived_by.insert(next, edge);
                frontier.push(Reverse(FrontierEntry {
                    cost: candidate,
                    node: next,
                }));
            }
        }
    }

    debug!(
        "No path from {start:?} to {end:?} ({} nodes reachable)",
        visited.len()
    );
    None
}

/// Sum of the weights along a sequence of edges.
pub fn path_cost<'a, N, W, I>(edges: I) -> W
where
    N: 'a,
    W: Weight + 'a,
    I: IntoIterator<Item = &'a Edge<N, W>>,
{
    edges
        .into_iter()
        .fold(W::zero(), |total, edge| total.add_weight(edge.label))
}

/// Walk the predecessor edges back from `end` and return them in path order.
fn reconstruct<N, W>(arrived_by: &HashMap<&N, &Edge<N, W>>, start: &N, end: &N) -> Vec<Edge<N, W>>
where
    N: Eq + Hash + Clone,
    W: Clone,
{
    let mut edges = Vec::new();
    let mut current = end;
    while current != start {
        match arrived_by.get(current) {
            Some(edge) => {
                edges.push((*edge).clone());
                current = &edge.from;
            }
            None => break,
        }
    }
    edges.reverse();
    edges
}
