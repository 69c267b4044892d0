//! Structural checks for built graphs and shortest-path trees.
//!
//! The builder runs [`check_symmetric`] in debug builds and logs anything
//! it finds; tests use both checks to assert invariants directly.

use thiserror::Error;

use super::traversal::ShortestPathTree;
use super::LabeledGraph;

/// A broken structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    /// `src → dst` exists but `dst → src` does not.
    #[error("edge {src} -> {dst} has no reverse edge")]
    MissingReverse {
        /// Source of the one-way edge.
        src: String,
        /// Target of the one-way edge.
        dst: String,
    },
    /// Both directions exist with different labels.
    #[error("edges between {a} and {b} carry different labels")]
    LabelMismatch {
        /// Lesser endpoint.
        a: String,
        /// Greater endpoint.
        b: String,
    },
    /// An edge exists with no shared context.
    #[error("edge {src} -> {dst} has an empty label")]
    EmptyLabel {
        /// Source of the edge.
        src: String,
        /// Target of the edge.
        dst: String,
    },
    /// A non-root tree vertex does not have exactly one parent.
    #[error("tree vertex {vertex} has {parents} parents")]
    ParentCount {
        /// Offending vertex.
        vertex: String,
        /// Number of outgoing tree edges found.
        parents: usize,
    },
    /// The tree root points somewhere.
    #[error("tree root {root} has an outgoing edge")]
    RootHasParent {
        /// The root vertex.
        root: String,
    },
    /// A tree edge does not lead one step closer to the root.
    #[error("tree edge {child} -> {parent} does not decrease depth by one")]
    DepthMismatch {
        /// Child vertex.
        child: String,
        /// Recorded parent.
        parent: String,
    },
}

/// Check that every edge has a reverse twin with the same non-empty label.
pub fn check_symmetric(graph: &LabeledGraph) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();
    for (src, dst, label) in graph.edges() {
        if label.is_empty() {
            violations.push(IntegrityViolation::EmptyLabel {
                src: src.to_string(),
                dst: dst.to_string(),
            });
        }
        match graph.label(dst, src) {
            None => violations.push(IntegrityViolation::MissingReverse {
                src: src.to_string(),
                dst: dst.to_string(),
            }),
            // Report each mismatched pair once.
            Some(reverse) if reverse != label && src < dst => {
                violations.push(IntegrityViolation::LabelMismatch {
                    a: src.to_string(),
                    b: dst.to_string(),
                })
            }
            Some(_) => {}
        }
    }
    violations
}

/// Check the parent-pointer shape of a shortest-path tree.
pub fn check_tree(tree: &ShortestPathTree) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();
    let edges = tree.as_graph();
    for vertex in tree.vertices() {
        let parents = edges.out_degree(vertex);
        if vertex == tree.root() {
            if parents != 0 {
                violations.push(IntegrityViolation::RootHasParent {
                    root: vertex.to_string(),
                });
            }
            continue;
        }
        if parents != 1 {
            violations.push(IntegrityViolation::ParentCount {
                vertex: vertex.to_string(),
                parents,
            });
            continue;
        }
        if let Some(parent) = tree.parent(vertex) {
            let steps_closer = match (tree.depth(vertex), tree.depth(parent)) {
                (Some(child_depth), Some(parent_depth)) => child_depth == parent_depth + 1,
                _ => false,
            };
            if !steps_closer {
                violations.push(IntegrityViolation::DepthMismatch {
                    child: vertex.to_string(),
                    parent: parent.to_string(),
                });
            }
        }
    }
    violations
}
