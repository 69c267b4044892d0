//! From three tables on disk to a centered universe.

use crate::test_utils::*;
use costar::{open, CostarError, PathQuery};
use tempfile::TempDir;

const MOVIES: &str = "1|Apollo 13\n2|Footloose\n3|Cast Away\n";
const ACTORS: &str = "10|Kevin Bacon\n11|Tom Hanks\n12|Lori Singer\n13|Helen Hunt\n14|Loner\n";
const LINKS: &str = "1|10\n1|11\n2|10\n2|12\n3|11\n3|13\n";

/// Test: open builds the graph and centers it on the configured actor
#[test]
fn test_open_centers_universe() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), MOVIES, ACTORS, LINKS);

    let (graph, center) = open(&config).unwrap();

    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(center.name(), "Kevin Bacon");
    assert_eq!(center.separation("Helen Hunt"), Some(2));
    let PathQuery::Found(hops) = center.path_from(&graph, "Helen Hunt") else {
        panic!("Helen Hunt should be reachable");
    };
    assert_eq!(hops[0].labels, labels(&["Cast Away"]));
    assert_eq!(hops[1].labels, labels(&["Apollo 13"]));
    assert!(center.unreachable(&graph).contains("Loner"));
}

/// Test: a configured center missing from the data is a not-found error
#[test]
fn test_open_with_unknown_center() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), MOVIES, ACTORS, LINKS).center("Nobody");

    let err = open(&config).unwrap_err();
    assert!(matches!(err, CostarError::VertexNotFound { ref vertex } if vertex == "Nobody"));
}
