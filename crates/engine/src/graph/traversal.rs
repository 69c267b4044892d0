//! Breadth-first shortest-path trees and path reconstruction.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use costar_core::{CostarError, CostarResult, LabelSet};

use super::types::Hop;
use super::LabeledGraph;

/// BFS result rooted at a single vertex.
///
/// The tree is itself a [`LabeledGraph`]: every non-root vertex has exactly
/// one outgoing edge, pointing at the vertex that discovered it, labeled
/// like the source-graph edge that was followed. The root has none.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    root: String,
    tree: LabeledGraph,
    depths: FxHashMap<String, usize>,
    discovery: Vec<String>,
}

impl ShortestPathTree {
    /// The root vertex.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Tree edges as a graph (child → parent).
    pub fn as_graph(&self) -> &LabeledGraph {
        &self.tree
    }

    /// Whether `vertex` is reachable from the root.
    pub fn contains(&self, vertex: &str) -> bool {
        self.tree.has_vertex(vertex)
    }

    /// Reachable vertices, root included, sorted by identity.
    pub fn vertices(&self) -> Vec<&str> {
        self.tree.vertices()
    }

    /// Reachable vertices in the order BFS discovered them.
    pub fn discovery_order(&self) -> &[String] {
        &self.discovery
    }

    /// Number of reachable vertices, root included.
    pub fn vertex_count(&self) -> usize {
        self.tree.vertex_count()
    }

    /// The vertex that discovered `vertex`; `None` for the root or unknown vertices.
    pub fn parent(&self, vertex: &str) -> Option<&str> {
        self.tree.out_neighbors(vertex).into_iter().next()
    }

    /// BFS distance from the root.
    pub fn depth(&self, vertex: &str) -> Option<usize> {
        self.depths.get(vertex).copied()
    }

    /// Label of the tree edge `child → parent`.
    pub fn label(&self, child: &str, parent: &str) -> Option<&LabelSet> {
        self.tree.label(child, parent)
    }

    /// Vertices from the root down to `vertex`: `[root, …, vertex]`.
    ///
    /// Empty when `vertex` is not reachable, which callers read as infinite
    /// separation.
    pub fn path(&self, vertex: &str) -> Vec<String> {
        if !self.contains(vertex) {
            return Vec::new();
        }
        let mut path = vec![vertex.to_string()];
        let mut current = vertex;
        while let Some(parent) = self.parent(current) {
            path.push(parent.to_string());
            current = parent;
        }
        path.reverse();
        path
    }

    /// Hops from `vertex` up to the root, each with its shared contexts.
    ///
    /// Empty for the root itself and for unreachable vertices.
    pub fn hops(&self, vertex: &str) -> Vec<Hop> {
        let path = self.path(vertex);
        path.windows(2)
            .rev()
            .map(|pair| Hop {
                from: pair[1].clone(),
                to: pair[0].clone(),
                labels: self.label(&pair[1], &pair[0]).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

/// Breadth-first search from `root`, producing its shortest-path tree.
///
/// Neighbors are expanded in [`LabeledGraph::out_neighbors`] order, so ties
/// between equally distant discoverers resolve the same way every run.
/// Fails with [`CostarError::VertexNotFound`] when `root` is not in `graph`.
pub fn bfs(graph: &LabeledGraph, root: &str) -> CostarResult<ShortestPathTree> {
    if !graph.has_vertex(root) {
        return Err(CostarError::vertex_not_found(root));
    }

    let mut tree = LabeledGraph::new();
    let mut depths: FxHashMap<String, usize> = FxHashMap::default();
    let mut discovery: Vec<String> = Vec::new();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();

    tree.insert_vertex(root);
    depths.insert(root.to_string(), 0);
    discovery.push(root.to_string());
    queue.push_back((root, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for neighbor in graph.out_neighbors(current) {
            if tree.has_vertex(neighbor) {
                continue;
            }
            let label = graph.label(current, neighbor).cloned().unwrap_or_default();
            tree.insert_vertex(neighbor);
            tree.insert_directed_edge(neighbor, current, label)?;
            depths.insert(neighbor.to_string(), depth + 1);
            discovery.push(neighbor.to_string());
            queue.push_back((neighbor, depth + 1));
        }
    }

    tracing::debug!(
        root = %root,
        reached = tree.vertex_count(),
        total = graph.vertex_count(),
        "bfs complete"
    );

    Ok(ShortestPathTree {
        root: root.to_string(),
        tree,
        depths,
        discovery,
    })
}
