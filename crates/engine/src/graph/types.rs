//! Result types returned by traversal and analytics queries.

use std::cmp::Ordering;

use costar_core::LabelSet;

/// Sort direction for separation rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Smallest average separation first (best connected).
    Ascending,
    /// Largest average separation first.
    Descending,
}

impl RankOrder {
    /// Order implied by a signed count: negative means bottom `|n|`.
    pub fn from_signed(n: i64) -> (Self, usize) {
        let count = usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX);
        if n < 0 {
            (RankOrder::Descending, count)
        } else {
            (RankOrder::Ascending, count)
        }
    }
}

/// A vertex paired with its average separation.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedVertex {
    /// Vertex identity.
    pub vertex: String,
    /// Mean distance to every vertex it reaches.
    pub average_separation: f64,
    /// Number of vertices in its shortest-path tree, itself included.
    pub reachable: usize,
}

impl RankedVertex {
    /// Compare by separation in the given order, then by identity.
    pub fn cmp_in(&self, other: &Self, order: RankOrder) -> Ordering {
        let by_value = self.average_separation.total_cmp(&other.average_separation);
        let by_value = match order {
            RankOrder::Ascending => by_value,
            RankOrder::Descending => by_value.reverse(),
        };
        by_value.then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// One hop of a path reported from a vertex back toward the center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// The vertex further from the center.
    pub from: String,
    /// Its BFS parent, one step closer to the center.
    pub to: String,
    /// Contexts shared by the two.
    pub labels: LabelSet,
}

/// Reachability summary of a center of the universe.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterSummary {
    /// The root vertex.
    pub center: String,
    /// Vertices reachable from the root, root included.
    pub reachable: usize,
    /// Vertices in the whole graph.
    pub total: usize,
    /// Mean separation of reachable non-root vertices.
    pub average_separation: f64,
}
