//! Labeled co-appearance graph.
//!
//! Vertices are actor identities; each directed edge carries the set of
//! contexts (movies) the two actors share. The graph is assembled once by
//! [`builder::GraphBuilder`] and treated as read-only afterwards: traversal
//! and analytics only ever take `&LabeledGraph`.

pub mod adjacency;
pub mod analytics;
pub mod builder;
pub mod integrity;
pub mod session;
pub mod traversal;
pub mod types;

use rustc_hash::FxHashMap;

use costar_core::{CostarError, CostarResult, LabelSet};

use adjacency::Adjacency;

/// Directed graph whose edges carry label sets.
///
/// Vertex and edge existence checks, label lookups and in-degree queries are
/// O(1) amortized. Enumerations are sorted by vertex identity so that output
/// is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledGraph {
    vertices: FxHashMap<String, Adjacency>,
    edge_count: usize,
}

impl LabeledGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Vertices
    // =========================================================================

    /// Add a vertex. Re-inserting an existing vertex leaves its edges intact.
    pub fn insert_vertex(&mut self, vertex: &str) {
        if !self.vertices.contains_key(vertex) {
            self.vertices.insert(vertex.to_string(), Adjacency::new());
        }
    }

    /// Whether the vertex exists.
    pub fn has_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// All vertices, sorted by identity.
    pub fn vertices(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self.vertices.keys().map(String::as_str).collect();
        all.sort_unstable();
        all
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // =========================================================================
    // Edges
    // =========================================================================

    /// Create or overwrite the edge `src → dst` with `label`.
    ///
    /// Both endpoints must already exist. A second call on the same ordered
    /// pair replaces the label; use [`LabeledGraph::merge_directed_edge`] to
    /// union instead.
    pub fn insert_directed_edge(
        &mut self,
        src: &str,
        dst: &str,
        label: LabelSet,
    ) -> CostarResult<()> {
        self.require_endpoints(src, dst)?;
        self.store_edge(src, dst, label);
        Ok(())
    }

    /// Union `labels` into the edge `src → dst`, creating it if absent.
    ///
    /// Both endpoints must already exist.
    pub fn merge_directed_edge<I>(&mut self, src: &str, dst: &str, labels: I) -> CostarResult<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.require_endpoints(src, dst)?;
        let mut merged = self.label(src, dst).cloned().unwrap_or_default();
        merged.extend(labels.into_iter().map(Into::into));
        self.store_edge(src, dst, merged);
        Ok(())
    }

    /// Whether the edge `src → dst` exists.
    pub fn has_edge(&self, src: &str, dst: &str) -> bool {
        self.vertices
            .get(src)
            .is_some_and(|adj| adj.has_outgoing(dst))
    }

    /// Label of `src → dst`, or `None` when there is no such edge.
    pub fn label(&self, src: &str, dst: &str) -> Option<&LabelSet> {
        self.vertices.get(src).and_then(|adj| adj.label(dst))
    }

    /// Number of edges ending at `vertex` (0 for unknown vertices).
    pub fn in_degree(&self, vertex: &str) -> usize {
        self.vertices.get(vertex).map_or(0, Adjacency::in_degree)
    }

    /// Number of edges leaving `vertex` (0 for unknown vertices).
    pub fn out_degree(&self, vertex: &str) -> usize {
        self.vertices.get(vertex).map_or(0, Adjacency::out_degree)
    }

    /// Targets of edges leaving `vertex`, sorted by identity.
    pub fn out_neighbors(&self, vertex: &str) -> Vec<&str> {
        self.vertices
            .get(vertex)
            .map(Adjacency::sorted_targets)
            .unwrap_or_default()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All edges as `(src, dst, label)`, sorted by `(src, dst)`.
    pub fn edges(&self) -> Vec<(&str, &str, &LabelSet)> {
        let mut out: Vec<(&str, &str, &LabelSet)> = self
            .vertices
            .iter()
            .flat_map(|(src, adj)| {
                adj.outgoing
                    .iter()
                    .map(move |(dst, label)| (src.as_str(), dst.as_str(), label))
            })
            .collect();
        out.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        out
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn require_endpoints(&self, src: &str, dst: &str) -> CostarResult<()> {
        if self.has_vertex(src) && self.has_vertex(dst) {
            Ok(())
        } else {
            Err(CostarError::MissingEndpoint {
                src: src.to_string(),
                dst: dst.to_string(),
            })
        }
    }

    /// Endpoints must have been checked by the caller.
    fn store_edge(&mut self, src: &str, dst: &str, label: LabelSet) {
        let created = match self.vertices.get_mut(src) {
            Some(adj) => adj.outgoing.insert(dst.to_string(), label).is_none(),
            None => return,
        };
        if created {
            if let Some(adj) = self.vertices.get_mut(dst) {
                adj.incoming.insert(src.to_string());
            }
            self.edge_count += 1;
        }
    }
}
