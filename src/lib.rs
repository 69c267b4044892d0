//! Costar: an actor co-appearance graph.
//!
//! Actors are vertices; two actors are joined when they appeared in at least
//! one movie together, and the edge carries the titles they share. On top of
//! that graph sit breadth-first shortest paths from a chosen center, in-degree
//! and separation range queries, and a ranking of every actor by average
//! separation.
//!
//! This crate re-exports the public surface of the workspace crates and adds
//! [`open`], which goes from a [`CostarConfig`] to a centered universe.
//!
//! ```no_run
//! use costar::{open, CostarConfig, PathQuery};
//!
//! let (graph, center) = open(&CostarConfig::new())?;
//! if let PathQuery::Found(hops) = center.path_from(&graph, "Tom Hanks") {
//!     println!("Tom Hanks's number is {}", hops.len());
//! }
//! # Ok::<(), costar::CostarError>(())
//! ```

// ============================================================================
// Data model, configuration and errors
// ============================================================================

pub use costar_core::{
    BuildOptions, BuildStrategy, CostarConfig, CostarError, CostarResult, DataPaths, LabelSet,
    RelationTable, DEFAULT_CENTER,
};

// ============================================================================
// Graph, traversal and analytics
// ============================================================================

pub use costar_engine::{
    analytics, bfs, build_graph, check_symmetric, check_tree, Center, CenterSummary,
    GraphBuilder, Hop, IntegrityViolation, LabeledGraph, PathQuery, RankOrder, RankedVertex,
    ShortestPathTree,
};

// ============================================================================
// Ingest
// ============================================================================

pub use costar_ingest::{load_dataset, Catalog, Dataset, IngestReport};

/// Load the configured tables, build the graph and center it.
///
/// Fails with `VertexNotFound` when the configured center is not an actor
/// in the data.
pub fn open(config: &CostarConfig) -> CostarResult<(LabeledGraph, Center)> {
    config.validate()?;
    let dataset = load_dataset(config)?;
    let graph = GraphBuilder::new()
        .strategy(config.build.strategy)
        .build(&dataset.relation)?;
    let center = Center::establish(&graph, &config.center)?;
    Ok((graph, center))
}
