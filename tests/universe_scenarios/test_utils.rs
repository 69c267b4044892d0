//! Shared fixtures for the scenario suite.

use std::fs;
use std::path::Path;

use costar::{build_graph, CostarConfig, DataPaths, LabeledGraph, RelationTable};

/// `{A:{M1,M2}, B:{M1}, C:{M2}, D:{}}`
pub fn sample_relation() -> RelationTable {
    [
        ("A", vec!["M1", "M2"]),
        ("B", vec!["M1"]),
        ("C", vec!["M2"]),
        ("D", vec![]),
    ]
    .into_iter()
    .collect()
}

pub fn sample_graph() -> LabeledGraph {
    build_graph(&sample_relation()).unwrap()
}

/// Two components: a five-actor chain plus a pair, and one loner.
pub fn chain_relation() -> RelationTable {
    [
        ("Ada", vec!["Alpha"]),
        ("Ben", vec!["Alpha", "Beta"]),
        ("Cy", vec!["Beta", "Gamma"]),
        ("Dee", vec!["Gamma", "Delta"]),
        ("Eve", vec!["Delta"]),
        ("Fay", vec!["Omega"]),
        ("Gus", vec!["Omega"]),
        ("Hal", vec![]),
    ]
    .into_iter()
    .collect()
}

pub fn labels(items: &[&str]) -> costar::LabelSet {
    items.iter().map(|s| s.to_string()).collect()
}

/// Write the three tables under `dir` and return a config pointing at them.
pub fn write_config(dir: &Path, movies: &str, actors: &str, associations: &str) -> CostarConfig {
    let data = DataPaths {
        movies: dir.join("movies.txt"),
        actors: dir.join("actors.txt"),
        associations: dir.join("movie-actors.txt"),
    };
    fs::write(&data.movies, movies).unwrap();
    fs::write(&data.actors, actors).unwrap();
    fs::write(&data.associations, associations).unwrap();
    CostarConfig::new().data(data)
}
