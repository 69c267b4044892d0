//! Per-vertex adjacency entry.
//!
//! Each vertex owns its outgoing edges (target → label set) and the set of
//! vertices pointing at it, so both out-neighbor enumeration and in-degree
//! are answered without scanning the graph.

use rustc_hash::{FxHashMap, FxHashSet};

use costar_core::LabelSet;

/// Adjacency entry for a single vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    /// Forward adjacency: dst → labels of `self → dst`.
    pub(crate) outgoing: FxHashMap<String, LabelSet>,
    /// Reverse adjacency: sources of edges ending at this vertex.
    pub(crate) incoming: FxHashSet<String>,
}

impl Adjacency {
    /// Create an empty adjacency entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label of the outgoing edge to `dst`.
    pub fn label(&self, dst: &str) -> Option<&LabelSet> {
        self.outgoing.get(dst)
    }

    /// Whether an outgoing edge to `dst` exists.
    pub fn has_outgoing(&self, dst: &str) -> bool {
        self.outgoing.contains_key(dst)
    }

    /// Number of edges ending at this vertex.
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Number of edges leaving this vertex.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Outgoing targets sorted by identity.
    pub fn sorted_targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = self.outgoing.keys().map(String::as_str).collect();
        targets.sort_unstable();
        targets
    }
}
