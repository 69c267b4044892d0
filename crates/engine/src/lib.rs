//! Graph engine for costar.
//!
//! Build a [`LabeledGraph`] from a relation table, compute shortest-path
//! trees with [`bfs`], and answer separation and degree queries through
//! [`analytics`] or a [`Center`].

pub mod graph;

pub use graph::analytics;
pub use graph::builder::{build_graph, GraphBuilder};
pub use graph::integrity::{check_symmetric, check_tree, IntegrityViolation};
pub use graph::session::{Center, PathQuery};
pub use graph::traversal::{bfs, ShortestPathTree};
pub use graph::types::{CenterSummary, Hop, RankOrder, RankedVertex};
pub use graph::LabeledGraph;
