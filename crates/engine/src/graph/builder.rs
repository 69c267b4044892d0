//! Graph construction from an actor → contexts relation.
//!
//! Two actors are connected in both directions when they share at least one
//! context; the edge label is the set of shared contexts. Both strategies
//! produce the same graph, they differ only in how pairs are found.

use std::time::Instant;

use costar_core::{BuildStrategy, CostarResult, LabelSet, RelationTable};

use super::integrity;
use super::LabeledGraph;

/// Builds a [`LabeledGraph`] from a [`RelationTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    strategy: BuildStrategy,
}

impl GraphBuilder {
    /// Builder using the default (inverted) strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the pair discovery strategy.
    pub fn strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Build the graph. Every vertex of `relation` is present in the result,
    /// including those with no shared contexts.
    pub fn build(&self, relation: &RelationTable) -> CostarResult<LabeledGraph> {
        let started = Instant::now();
        let mut graph = LabeledGraph::new();
        for vertex in relation.vertices() {
            graph.insert_vertex(vertex);
        }

        match self.strategy {
            BuildStrategy::Inverted => connect_by_context(&mut graph, relation)?,
            BuildStrategy::Pairwise => connect_pairwise(&mut graph, relation)?,
        }

        tracing::debug!(
            strategy = ?self.strategy,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "graph built"
        );

        if cfg!(debug_assertions) {
            for violation in integrity::check_symmetric(&graph) {
                tracing::warn!(%violation, "graph integrity check failed");
            }
        }

        Ok(graph)
    }
}

/// Build with the default strategy.
pub fn build_graph(relation: &RelationTable) -> CostarResult<LabeledGraph> {
    GraphBuilder::new().build(relation)
}

/// For each context, connect every pair of actors that appear in it,
/// merging the context into the pair's label.
fn connect_by_context(graph: &mut LabeledGraph, relation: &RelationTable) -> CostarResult<()> {
    for (context, members) in relation.by_context() {
        let members: Vec<&str> = members.into_iter().collect();
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                graph.merge_directed_edge(a, b, [context])?;
                graph.merge_directed_edge(b, a, [context])?;
            }
        }
    }
    Ok(())
}

/// Intersect the context sets of every unordered pair of actors.
fn connect_pairwise(graph: &mut LabeledGraph, relation: &RelationTable) -> CostarResult<()> {
    let entries: Vec<(&String, &LabelSet)> = relation.iter().collect();
    for (i, (a, a_contexts)) in entries.iter().enumerate() {
        for (b, b_contexts) in &entries[i + 1..] {
            let shared: LabelSet = a_contexts.intersection(b_contexts).cloned().collect();
            if shared.is_empty() {
                continue;
            }
            graph.insert_directed_edge(a, b, shared.clone())?;
            graph.insert_directed_edge(b, a, shared)?;
        }
    }
    Ok(())
}
