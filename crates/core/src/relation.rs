//! The actor → contexts relation consumed by the graph builder.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

/// Set of shared contexts (movie titles) attached to an edge.
///
/// Ordered so that labels render and compare the same way on every run.
pub type LabelSet = BTreeSet<String>;

/// Mapping from vertex identity to the contexts it participates in.
///
/// A vertex may map to an empty set; it still becomes a graph vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationTable {
    entries: BTreeMap<String, LabelSet>,
}

impl RelationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex with no contexts. Existing contexts are kept.
    pub fn add_vertex(&mut self, vertex: impl Into<String>) {
        self.entries.entry(vertex.into()).or_default();
    }

    /// Record that `vertex` participates in `context`.
    pub fn insert(&mut self, vertex: impl Into<String>, context: impl Into<String>) {
        self.entries
            .entry(vertex.into())
            .or_default()
            .insert(context.into());
    }

    /// Contexts of a vertex, if it is present.
    pub fn contexts(&self, vertex: &str) -> Option<&LabelSet> {
        self.entries.get(vertex)
    }

    /// Whether the vertex is registered.
    pub fn contains(&self, vertex: &str) -> bool {
        self.entries.contains_key(vertex)
    }

    /// Number of registered vertices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no vertex is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(vertex, contexts)` in vertex order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, LabelSet> {
        self.entries.iter()
    }

    /// Iterate vertex identities in order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Invert the relation: context → vertices sharing it.
    pub fn by_context(&self) -> BTreeMap<&str, BTreeSet<&str>> {
        let mut index: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (vertex, contexts) in &self.entries {
            for context in contexts {
                index.entry(context.as_str()).or_default().insert(vertex.as_str());
            }
        }
        index
    }
}

impl<'a> IntoIterator for &'a RelationTable {
    type Item = (&'a String, &'a LabelSet);
    type IntoIter = btree_map::Iter<'a, String, LabelSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<V, C, I> FromIterator<(V, I)> for RelationTable
where
    V: Into<String>,
    C: Into<String>,
    I: IntoIterator<Item = C>,
{
    fn from_iter<T: IntoIterator<Item = (V, I)>>(iter: T) -> Self {
        let mut table = RelationTable::new();
        for (vertex, contexts) in iter {
            let vertex = vertex.into();
            table.add_vertex(vertex.clone());
            for context in contexts {
                table.insert(vertex.clone(), context);
            }
        }
        table
    }
}
