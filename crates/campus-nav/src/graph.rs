//! Named, weighted route graph.
//!
//! # Data layout
//!
//! Node names are interned once into a `NodeId` arena:
//!
//! ```text
//! ids:       FxHashMap<String, NodeId>   name  → handle
//! names:     Vec<String>                 handle → name
//! adjacency: Vec<Vec<Edge>>              handle → outgoing edges, insertion order
//! ```
//!
//! Routing works entirely on handles, so the search loop touches no strings
//! and indexes plain `Vec`s.
//!
//! # Edges
//!
//! Edges are append-only.  A bidirectional edge is stored as two independent
//! directed entries with the same weight, and inserting the same pair again
//! adds a parallel edge instead of replacing the old one.  Deduplication is
//! left to the file codec.

use std::collections::BTreeMap;

use log::warn;
use rustc_hash::FxHashMap;

use campus_core::NodeId;

use crate::router::{DijkstraRouter, Route, Router};
use crate::{NavError, NavResult};

// ── Edge types ────────────────────────────────────────────────────────────────

/// A directed adjacency entry, by handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub to:     NodeId,
    pub weight: f64,
}

/// A directed adjacency entry, by name.  Returned by the name-based API.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    pub name:   String,
    pub weight: f64,
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Weighted, optionally directed graph over uniquely named places.
#[derive(Clone, Debug, Default)]
pub struct RouteGraph {
    ids:       FxHashMap<String, NodeId>,
    names:     Vec<String>,
    adjacency: Vec<Vec<Edge>>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed adjacency entries (a bidirectional edge counts 2).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Ensure `name` exists and return its handle.  Never touches existing
    /// edges.
    ///
    /// # Errors
    ///
    /// [`NavError::NodeLimit`] once every `NodeId` value is taken.
    pub fn add_node(&mut self, name: &str) -> NavResult<NodeId> {
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }
        let id = NodeId::try_from(self.names.len())
            .map_err(|_| NavError::NodeLimit { name: name.to_owned() })?;
        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Append `from → to` with `weight`, and `to → from` too if
    /// `bidirectional`.  Missing endpoints are created.
    ///
    /// Weights are expected to be non-negative.  Negative weights are
    /// accepted but break shortest-path correctness.
    ///
    /// # Errors
    ///
    /// [`NavError::NonFiniteWeight`] for `NaN` or infinite weights; the graph
    /// is left untouched.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64, bidirectional: bool) -> NavResult<()> {
        if !weight.is_finite() {
            return Err(NavError::NonFiniteWeight {
                from: from.to_owned(),
                to: to.to_owned(),
                weight,
            });
        }
        if weight < 0.0 {
            warn!("edge {from:?} -> {to:?} has negative weight {weight}; routes may be wrong");
        }

        let a = self.add_node(from)?;
        let b = self.add_node(to)?;
        self.adjacency[a.index()].push(Edge { to: b, weight });
        if bidirectional {
            self.adjacency[b.index()].push(Edge { to: a, weight });
        }
        Ok(())
    }

    /// Convenience: [`add_edge`](Self::add_edge) in **both directions**, the
    /// common case for walkways.
    pub fn add_road(&mut self, a: &str, b: &str, weight: f64) -> NavResult<()> {
        self.add_edge(a, b, weight, true)
    }

    /// Convenience: a one-way [`add_edge`](Self::add_edge).
    pub fn add_directed_edge(&mut self, from: &str, to: &str, weight: f64) -> NavResult<()> {
        self.add_edge(from, to, weight, false)
    }

    /// Drop every node and edge.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.names.clear();
        self.adjacency.clear();
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn has_node(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Name of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id.index()]
    }

    /// Node names in insertion order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Outgoing edges of `id`, in insertion order.
    #[inline]
    pub fn out_edges(&self, id: NodeId) -> &[Edge] {
        &self.adjacency[id.index()]
    }

    /// Outgoing edges of `name`; empty if `name` is unknown.
    pub fn neighbors(&self, name: &str) -> Vec<Neighbor> {
        let Some(id) = self.node_id(name) else {
            return Vec::new();
        };
        self.out_edges(id)
            .iter()
            .map(|e| Neighbor { name: self.names[e.to.index()].clone(), weight: e.weight })
            .collect()
    }

    /// Full adjacency by name, keyed in sorted order for stable persistence.
    pub fn export_graph(&self) -> BTreeMap<String, Vec<Neighbor>> {
        self.names
            .iter()
            .map(|name| (name.clone(), self.neighbors(name)))
            .collect()
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Lowest-weight route from `start` to `end` using [`DijkstraRouter`].
    ///
    /// Returns [`Route::unreachable`] if either endpoint is unknown or no
    /// path exists.
    pub fn shortest_path(&self, start: &str, end: &str) -> Route {
        DijkstraRouter.route(self, start, end)
    }
}
