//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers that want a different search (A*, hop-limited, accessibility
//! aware) implement [`Router`]; [`RouteGraph::shortest_path`] is just
//! `DijkstraRouter.route(..)`.
//!
//! # No-path results
//!
//! An unknown endpoint and an unreachable destination collapse to the same
//! outcome: [`Route::unreachable`], an empty node list with total `0.0`.
//!
//! # Ties
//!
//! Among equal-cost routes the one found first wins.  The heap breaks cost
//! ties by `NodeId` (insertion order of the node), which is deterministic
//! but not part of the contract.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use campus_core::NodeId;

use crate::graph::RouteGraph;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Node names from start to end inclusive.  Empty when no route exists.
    pub nodes: Vec<String>,
    /// Sum of edge weights along `nodes`.
    pub total: f64,
}

impl Route {
    /// The "no path" result.
    pub fn unreachable() -> Self {
        Self { nodes: Vec::new(), total: 0.0 }
    }

    /// `true` if no route was found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed (0 for both trivial and empty routes).
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router {
    /// Compute a route from `start` to `end` by name.
    ///
    /// `start == end` on a known node yields the single-node route with
    /// total `0.0`.
    fn route(&self, graph: &RouteGraph, start: &str, end: &str) -> Route;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Label-setting shortest-path search with lazy deletion of stale heap
/// entries.  Requires non-negative weights.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &RouteGraph, start: &str, end: &str) -> Route {
        let (Some(from), Some(to)) = (graph.node_id(start), graph.node_id(end)) else {
            return Route::unreachable();
        };
        if from == to {
            return Route { nodes: vec![start.to_owned()], total: 0.0 };
        }
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry.  `f64` has no total order, so compare with `total_cmp`.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    cost: f64,
    node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

fn dijkstra(graph: &RouteGraph, from: NodeId, to: NodeId) -> Route {
    let n = graph.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev[v] = node that reached v; None for unreached nodes and `from`.
    let mut prev: Vec<Option<NodeId>> = vec![None; n];

    dist[from.index()] = 0.0;

    // Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
    heap.push(Reverse(Candidate { cost: 0.0, node: from }));

    while let Some(Reverse(Candidate { cost, node })) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }
        if node == to {
            break;
        }

        for edge in graph.out_edges(node) {
            let candidate = cost + edge.weight;
            if candidate < dist[edge.to.index()] {
                dist[edge.to.index()] = candidate;
                prev[edge.to.index()] = Some(node);
                heap.push(Reverse(Candidate { cost: candidate, node: edge.to }));
            }
        }
    }

    if dist[to.index()].is_infinite() {
        return Route::unreachable();
    }
    reconstruct(graph, &prev, from, to, dist[to.index()])
}

fn reconstruct(
    graph: &RouteGraph,
    prev: &[Option<NodeId>],
    from: NodeId,
    to: NodeId,
    total: f64,
) -> Route {
    let mut path = vec![to];
    let mut cur = to;
    // A chain longer than the node count can only come from a cycle.
    while let Some(p) = prev[cur.index()] {
        if path.len() > prev.len() {
            break;
        }
        path.push(p);
        cur = p;
    }

    debug_assert_eq!(cur, from, "predecessor chain from {to} does not reach the start");
    if cur != from {
        return Route::unreachable();
    }

    path.reverse();
    Route {
        nodes: path.into_iter().map(|id| graph.name(id).to_owned()).collect(),
        total,
    }
}
