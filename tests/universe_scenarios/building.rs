//! Graph construction from a relation table.

use crate::test_utils::*;
use costar::{check_symmetric, BuildStrategy, GraphBuilder};

/// Test: the sample relation yields exactly A↔B and A↔C
#[test]
fn test_sample_edges_and_labels() {
    let g = sample_graph();

    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.label("A", "B"), Some(&labels(&["M1"])));
    assert_eq!(g.label("B", "A"), Some(&labels(&["M1"])));
    assert_eq!(g.label("A", "C"), Some(&labels(&["M2"])));
    assert!(!g.has_edge("B", "C"));
}

/// Test: an actor with no contexts is an isolated but enumerable vertex
#[test]
fn test_isolated_vertex_is_enumerable() {
    let g = sample_graph();

    assert!(g.has_vertex("D"));
    assert!(g.vertices().contains(&"D"));
    assert_eq!(g.in_degree("D"), 0);
    assert!(g.out_neighbors("D").is_empty());
}

/// Test: both strategies produce the same symmetric graph
#[test]
fn test_strategies_agree_on_chain() {
    let relation = chain_relation();
    let inverted = GraphBuilder::new()
        .strategy(BuildStrategy::Inverted)
        .build(&relation)
        .unwrap();
    let pairwise = GraphBuilder::new()
        .strategy(BuildStrategy::Pairwise)
        .build(&relation)
        .unwrap();

    assert_eq!(inverted.edges(), pairwise.edges());
    assert!(check_symmetric(&inverted).is_empty());
}

/// Test: a shared pair of movies lands in one label set
#[test]
fn test_multiple_shared_contexts_merge() {
    let relation: costar::RelationTable = [
        ("X", vec!["M1", "M2", "M3"]),
        ("Y", vec!["M2", "M3"]),
    ]
    .into_iter()
    .collect();
    let g = costar::build_graph(&relation).unwrap();

    assert_eq!(g.label("X", "Y"), Some(&labels(&["M2", "M3"])));
    assert_eq!(g.edge_count(), 2);
}
