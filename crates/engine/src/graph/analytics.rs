//! Degree ranking, reachability gaps and separation statistics.
//!
//! All functions are pure over an immutable graph or tree. Orderings are
//! total: ties always fall back to vertex identity.

use std::collections::BTreeSet;
use std::time::Instant;

use rayon::prelude::*;

use costar_core::CostarResult;

use super::traversal::{bfs, ShortestPathTree};
use super::types::{RankOrder, RankedVertex};
use super::LabeledGraph;

/// Vertices of `graph` that `tree` does not reach.
pub fn missing_vertices(graph: &LabeledGraph, tree: &ShortestPathTree) -> BTreeSet<String> {
    graph
        .vertices()
        .into_iter()
        .filter(|v| !tree.contains(v))
        .map(str::to_string)
        .collect()
}

/// Every vertex, ascending by in-degree, ties by identity.
///
/// For highest-first, iterate the result in reverse.
pub fn vertices_by_in_degree(graph: &LabeledGraph) -> Vec<String> {
    let mut all: Vec<(usize, &str)> = graph
        .vertices()
        .into_iter()
        .map(|v| (graph.in_degree(v), v))
        .collect();
    all.sort_unstable();
    all.into_iter().map(|(_, v)| v.to_string()).collect()
}

/// Vertices whose in-degree lies in `low..=high`, highest degree first.
///
/// Equal degrees are listed by identity. `low > high` yields nothing.
pub fn vertices_in_degree_range(graph: &LabeledGraph, low: usize, high: usize) -> Vec<(String, usize)> {
    let mut hits: Vec<(String, usize)> = vertices_by_in_degree(graph)
        .into_iter()
        .map(|v| {
            let degree = graph.in_degree(&v);
            (v, degree)
        })
        .filter(|(_, degree)| (low..=high).contains(degree))
        .collect();
    hits.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hits
}

/// Mean path length from `root` to every other vertex of `tree`.
///
/// Uses the depths recorded during BFS. A tree holding only its root
/// averages 0.
pub fn average_separation(tree: &ShortestPathTree, root: &str) -> f64 {
    let mut total = 0usize;
    let mut count = 0usize;
    for vertex in tree.discovery_order() {
        if vertex == root {
            continue;
        }
        if let Some(depth) = tree.depth(vertex) {
            total += depth;
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Tree vertices whose separation from the root lies in `low..=high`,
/// nearest first, ties by identity. The root itself has separation 0.
pub fn vertices_in_separation_range(tree: &ShortestPathTree, low: usize, high: usize) -> Vec<(String, usize)> {
    let mut hits: Vec<(String, usize)> = tree
        .vertices()
        .into_iter()
        .filter_map(|v| tree.depth(v).map(|d| (v.to_string(), d)))
        .filter(|(_, d)| (low..=high).contains(d))
        .collect();
    hits.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    hits
}

/// Average separation of every vertex as its own root, fully ordered.
///
/// Runs one BFS per vertex, O(V·(V+E)); the runs share nothing but the
/// read-only graph and are spread over the rayon pool.
pub fn separation_ranking(graph: &LabeledGraph, order: RankOrder) -> CostarResult<Vec<RankedVertex>> {
    let started = Instant::now();
    let mut ranked = graph
        .vertices()
        .into_par_iter()
        .map(|vertex| {
            let tree = bfs(graph, vertex)?;
            Ok(RankedVertex {
                vertex: vertex.to_string(),
                average_separation: average_separation(&tree, vertex),
                reachable: tree.vertex_count(),
            })
        })
        .collect::<CostarResult<Vec<RankedVertex>>>()?;
    ranked.sort_by(|a, b| a.cmp_in(b, order));

    tracing::debug!(
        vertices = ranked.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "separation ranking computed"
    );
    Ok(ranked)
}

/// The first `n` vertices of [`separation_ranking`] in `order`.
pub fn rank_by_average_separation(
    graph: &LabeledGraph,
    n: usize,
    order: RankOrder,
) -> CostarResult<Vec<RankedVertex>> {
    let mut ranked = separation_ranking(graph, order)?;
    ranked.truncate(n);
    Ok(ranked)
}
