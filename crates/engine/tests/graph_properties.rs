//! Property tests for the graph engine
//!
//! Random relation tables are built into graphs and checked against the
//! invariants every build and traversal must hold:
//! - edges come in symmetric pairs labeled with the shared contexts
//! - both build strategies and any insertion order give the same graph
//! - BFS paths start at the root, end at the target and match BFS depth
//! - reachable and missing vertices partition the graph

use std::collections::BTreeSet;

use costar_core::{BuildStrategy, RelationTable};
use costar_engine::analytics::{average_separation, missing_vertices, vertices_by_in_degree};
use costar_engine::{bfs, check_symmetric, check_tree, GraphBuilder};
use proptest::prelude::*;

/// Up to 12 actors, each in up to 4 of 8 movies.
fn arb_relation() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(
        (
            "[A-L]",
            prop::collection::vec("M[0-7]", 0..4),
        ),
        0..12,
    )
}

fn table(rows: &[(String, Vec<String>)]) -> RelationTable {
    rows.iter().map(|(a, ms)| (a.clone(), ms.clone())).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn shared_contexts_give_symmetric_edges(rows in arb_relation()) {
        let relation = table(&rows);
        let g = GraphBuilder::new().build(&relation).unwrap();

        prop_assert!(check_symmetric(&g).is_empty());
        let actors: Vec<&str> = relation.vertices().collect();
        for (i, a) in actors.iter().enumerate() {
            for b in &actors[i + 1..] {
                let shared: BTreeSet<String> = relation.contexts(a).unwrap()
                    .intersection(relation.contexts(b).unwrap())
                    .cloned()
                    .collect();
                if shared.is_empty() {
                    prop_assert!(!g.has_edge(a, b));
                    prop_assert!(!g.has_edge(b, a));
                } else {
                    prop_assert_eq!(g.label(a, b), Some(&shared));
                    prop_assert_eq!(g.label(b, a), Some(&shared));
                }
            }
        }
    }

    #[test]
    fn build_is_order_and_strategy_independent(rows in arb_relation()) {
        let forward = table(&rows);
        let mut reversed_rows = rows.clone();
        reversed_rows.reverse();
        let reversed = table(&reversed_rows);

        let a = GraphBuilder::new().strategy(BuildStrategy::Inverted).build(&forward).unwrap();
        let b = GraphBuilder::new().strategy(BuildStrategy::Pairwise).build(&reversed).unwrap();
        prop_assert_eq!(a.edges(), b.edges());
        prop_assert_eq!(a.vertices(), b.vertices());
    }

    #[test]
    fn paths_match_bfs_depth(rows in arb_relation()) {
        let g = GraphBuilder::new().build(&table(&rows)).unwrap();
        for root in g.vertices() {
            let tree = bfs(&g, root).unwrap();
            prop_assert!(check_tree(&tree).is_empty());
            for v in g.vertices() {
                let path = tree.path(v);
                match tree.depth(v) {
                    Some(depth) => {
                        prop_assert_eq!(path.first().map(String::as_str), Some(root));
                        prop_assert_eq!(path.last().map(String::as_str), Some(v));
                        prop_assert_eq!(path.len() - 1, depth);
                    }
                    None => prop_assert!(path.is_empty()),
                }
            }
        }
    }

    #[test]
    fn reachable_and_missing_partition_graph(rows in arb_relation()) {
        let g = GraphBuilder::new().build(&table(&rows)).unwrap();
        for root in g.vertices() {
            let tree = bfs(&g, root).unwrap();
            let missing = missing_vertices(&g, &tree);
            prop_assert_eq!(missing.len() + tree.vertex_count(), g.vertex_count());
            for v in tree.vertices() {
                prop_assert!(!missing.contains(v));
            }
            let avg = average_separation(&tree, root);
            prop_assert!(avg >= 0.0);
            if tree.vertex_count() == 1 {
                prop_assert_eq!(avg, 0.0);
            }
        }
    }

    #[test]
    fn average_separation_matches_path_lengths(rows in arb_relation()) {
        let g = GraphBuilder::new().build(&table(&rows)).unwrap();
        for root in g.vertices() {
            let tree = bfs(&g, root).unwrap();
            let lengths: Vec<usize> = tree
                .vertices()
                .into_iter()
                .filter(|v| *v != root)
                .map(|v| tree.path(v).len() - 1)
                .collect();
            let expected = if lengths.is_empty() {
                0.0
            } else {
                lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
            };
            prop_assert_eq!(average_separation(&tree, root), expected);
        }
    }

    #[test]
    fn in_degree_order_is_complete_and_monotone(rows in arb_relation()) {
        let g = GraphBuilder::new().build(&table(&rows)).unwrap();
        let ordered = vertices_by_in_degree(&g);
        prop_assert_eq!(ordered.len(), g.vertex_count());
        let unique: BTreeSet<&String> = ordered.iter().collect();
        prop_assert_eq!(unique.len(), ordered.len());
        for pair in ordered.windows(2) {
            prop_assert!(g.in_degree(&pair[0]) <= g.in_degree(&pair[1]));
        }
    }
}
