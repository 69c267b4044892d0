//! Centers, paths, separation and ranking.

use crate::test_utils::*;
use costar::{analytics, bfs, check_tree, Center, PathQuery, RankOrder};

/// Test: BFS from A reaches B and C, not D
#[test]
fn test_bfs_from_sample_root() {
    let g = sample_graph();
    let tree = bfs(&g, "A").unwrap();

    assert_eq!(tree.vertices(), vec!["A", "B", "C"]);
    assert_eq!(tree.parent("A"), None);
    assert_eq!(tree.parent("B"), Some("A"));
    assert_eq!(tree.parent("C"), Some("A"));
    assert_eq!(tree.label("B", "A"), Some(&labels(&["M1"])));
    assert_eq!(tree.path("B"), vec!["A".to_string(), "B".to_string()]);
    assert!(check_tree(&tree).is_empty());

    let missing: Vec<String> = analytics::missing_vertices(&g, &tree).into_iter().collect();
    assert_eq!(missing, vec!["D"]);
    assert_eq!(analytics::average_separation(&tree, "A"), 1.0);
}

/// Test: recentering on an isolated actor leaves only it reachable
#[test]
fn test_recenter_to_isolated_vertex() {
    let g = sample_graph();
    let center = Center::recenter(&g, "D").unwrap().unwrap();
    let summary = center.summary(&g);

    assert_eq!(summary.reachable, 1);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.average_separation, 0.0);
    let missing: Vec<String> = center.unreachable(&g).into_iter().collect();
    assert_eq!(missing, vec!["A", "B", "C"]);
}

/// Test: recentering twice on the same actor gives the same answers
#[test]
fn test_recenter_is_idempotent() {
    let g = costar::build_graph(&chain_relation()).unwrap();
    let first = Center::establish(&g, "Cy").unwrap();
    let second = Center::recenter(&g, "Cy").unwrap().unwrap();

    assert_eq!(first.summary(&g), second.summary(&g));
    assert_eq!(first.within_separation(0, 10), second.within_separation(0, 10));
    assert_eq!(first.path_from(&g, "Eve"), second.path_from(&g, "Eve"));
}

/// Test: unknown names are answers, not failures
#[test]
fn test_unknown_names() {
    let g = sample_graph();
    let center = Center::establish(&g, "A").unwrap();

    assert!(Center::recenter(&g, "Zed").unwrap().is_none());
    assert_eq!(center.path_from(&g, "Zed"), PathQuery::UnknownVertex);
    assert_eq!(center.path_from(&g, "D"), PathQuery::Unreachable);
    assert!(Center::establish(&g, "Zed").unwrap_err().is_not_found());
}

/// Test: a path along the chain reports every hop with its movie
#[test]
fn test_chain_path_hops() {
    let g = costar::build_graph(&chain_relation()).unwrap();
    let center = Center::establish(&g, "Ada").unwrap();

    let PathQuery::Found(hops) = center.path_from(&g, "Eve") else {
        panic!("Eve should be reachable from Ada");
    };
    let steps: Vec<(&str, &str)> = hops.iter().map(|h| (h.from.as_str(), h.to.as_str())).collect();
    assert_eq!(steps, vec![("Eve", "Dee"), ("Dee", "Cy"), ("Cy", "Ben"), ("Ben", "Ada")]);
    assert_eq!(hops[0].labels, labels(&["Delta"]));
    assert_eq!(center.separation("Eve"), Some(4));
}

/// Test: separation range is nearest first and bounded on both ends
#[test]
fn test_separation_range() {
    let g = costar::build_graph(&chain_relation()).unwrap();
    let center = Center::establish(&g, "Cy").unwrap();

    let hits = center.within_separation(1, 2);
    let names: Vec<&str> = hits.iter().map(|(v, _)| v.as_str()).collect();
    assert_eq!(names, vec!["Ben", "Dee", "Ada", "Eve"]);
    assert!(center.within_separation(3, 1).is_empty());
}

/// Test: ranking puts isolated and central actors first, tails last
#[test]
fn test_ranking_orders() {
    let g = costar::build_graph(&chain_relation()).unwrap();

    let top = analytics::rank_by_average_separation(&g, 3, RankOrder::Ascending).unwrap();
    let names: Vec<&str> = top.iter().map(|r| r.vertex.as_str()).collect();
    assert_eq!(names, vec!["Hal", "Fay", "Gus"]);

    let (order, n) = RankOrder::from_signed(-2);
    let bottom = analytics::rank_by_average_separation(&g, n, order).unwrap();
    let names: Vec<&str> = bottom.iter().map(|r| r.vertex.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Eve"]);
}

/// Test: degree range lists highest first
#[test]
fn test_degree_range() {
    let g = costar::build_graph(&chain_relation()).unwrap();
    let hits = analytics::vertices_in_degree_range(&g, 1, 2);

    let degrees: Vec<usize> = hits.iter().map(|(_, d)| *d).collect();
    assert_eq!(degrees, vec![2, 2, 2, 1, 1, 1, 1]);
    assert_eq!(hits[0].0, "Ben");
}
