//! The current center of the universe.
//!
//! A [`Center`] bundles a root vertex with its cached shortest-path tree.
//! Queries borrow it alongside the graph; recentering produces a new value
//! rather than mutating shared state.

use std::collections::BTreeSet;

use costar_core::CostarResult;

use super::analytics;
use super::traversal::{bfs, ShortestPathTree};
use super::types::{CenterSummary, Hop};
use super::LabeledGraph;

/// A root vertex and its shortest-path tree.
#[derive(Debug, Clone)]
pub struct Center {
    tree: ShortestPathTree,
    average_separation: f64,
}

/// Outcome of a path query against the current center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathQuery {
    /// The vertex is not in the graph at all.
    UnknownVertex,
    /// The vertex exists but no path links it to the center.
    Unreachable,
    /// Hops from the vertex up to the center; empty when it is the center.
    Found(Vec<Hop>),
}

impl Center {
    /// Run BFS from `root` and cache the result.
    ///
    /// Fails with `VertexNotFound` when `root` is not in `graph`; use
    /// [`Center::recenter`] for the "not found is an answer" flavour.
    pub fn establish(graph: &LabeledGraph, root: &str) -> CostarResult<Self> {
        let tree = bfs(graph, root)?;
        let average_separation = analytics::average_separation(&tree, root);
        tracing::info!(
            center = %root,
            reachable = tree.vertex_count(),
            total = graph.vertex_count(),
            average_separation,
            "center established"
        );
        Ok(Self {
            tree,
            average_separation,
        })
    }

    /// Move the center to `root`, or `None` when it is not in `graph`.
    pub fn recenter(graph: &LabeledGraph, root: &str) -> CostarResult<Option<Self>> {
        if !graph.has_vertex(root) {
            return Ok(None);
        }
        Self::establish(graph, root).map(Some)
    }

    /// The root vertex.
    pub fn name(&self) -> &str {
        self.tree.root()
    }

    /// The cached shortest-path tree.
    pub fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }

    /// Mean separation of everyone reachable from the center.
    pub fn average_separation(&self) -> f64 {
        self.average_separation
    }

    /// Reachability summary against `graph`.
    pub fn summary(&self, graph: &LabeledGraph) -> CenterSummary {
        CenterSummary {
            center: self.name().to_string(),
            reachable: self.tree.vertex_count(),
            total: graph.vertex_count(),
            average_separation: self.average_separation,
        }
    }

    /// Vertices with no path to the center.
    pub fn unreachable(&self, graph: &LabeledGraph) -> BTreeSet<String> {
        analytics::missing_vertices(graph, &self.tree)
    }

    /// Separation of `vertex` from the center, if reachable.
    pub fn separation(&self, vertex: &str) -> Option<usize> {
        self.tree.depth(vertex)
    }

    /// Path from `vertex` to the center with the contexts of each hop.
    pub fn path_from(&self, graph: &LabeledGraph, vertex: &str) -> PathQuery {
        if !graph.has_vertex(vertex) {
            PathQuery::UnknownVertex
        } else if !self.tree.contains(vertex) {
            PathQuery::Unreachable
        } else {
            PathQuery::Found(self.tree.hops(vertex))
        }
    }

    /// Reachable vertices whose separation lies in `low..=high`.
    pub fn within_separation(&self, low: usize, high: usize) -> Vec<(String, usize)> {
        analytics::vertices_in_separation_range(&self.tree, low, high)
    }
}
