//! ID → name tables and the actor → movies join.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;

use costar_core::{CostarResult, RelationTable};

use crate::reader::{read_pairs, read_pairs_from, Accept, IngestReport};

/// Movie and actor ID tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: FxHashMap<String, String>,
    actors: FxHashMap<String, String>,
    reports: Vec<IngestReport>,
}

/// A joined relation plus the reports of every table that fed it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Actor name → titles of the movies they appear in.
    pub relation: RelationTable,
    /// One report per input table, in load order.
    pub reports: Vec<IngestReport>,
}

impl Dataset {
    /// Total records skipped across all tables.
    pub fn skipped(&self) -> usize {
        self.reports.iter().map(|r| r.skipped).sum()
    }
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the movie and actor tables from disk.
    pub fn load(movies: &Path, actors: &Path, delimiter: char) -> CostarResult<Self> {
        let mut catalog = Catalog::new();
        let report = read_pairs(movies, delimiter, |id, title| catalog.add_movie(id, title))?;
        catalog.reports.push(report);
        let report = read_pairs(actors, delimiter, |id, name| catalog.add_actor(id, name))?;
        catalog.reports.push(report);
        Ok(catalog)
    }

    /// Register a movie; a repeated ID keeps the last title.
    pub fn add_movie(&mut self, id: &str, title: &str) -> Accept {
        self.movies.insert(id.to_string(), title.to_string());
        Accept::Yes
    }

    /// Register an actor; a repeated ID keeps the last name.
    pub fn add_actor(&mut self, id: &str, name: &str) -> Accept {
        self.actors.insert(id.to_string(), name.to_string());
        Accept::Yes
    }

    /// Title for a movie ID.
    pub fn movie(&self, id: &str) -> Option<&str> {
        self.movies.get(id).map(String::as_str)
    }

    /// Name for an actor ID.
    pub fn actor(&self, id: &str) -> Option<&str> {
        self.actors.get(id).map(String::as_str)
    }

    /// Number of known movies.
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of known actors.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Relation containing every known actor and no movies yet.
    pub fn cast(&self) -> RelationTable {
        let mut relation = RelationTable::new();
        for name in self.actors.values() {
            relation.add_vertex(name.as_str());
        }
        relation
    }

    /// Record `movie_id|actor_id` into `relation`; unknown IDs are rejected.
    pub fn associate(&self, relation: &mut RelationTable, movie_id: &str, actor_id: &str) -> Accept {
        match (self.movie(movie_id), self.actor(actor_id)) {
            (Some(title), Some(name)) => {
                relation.insert(name, title);
                Accept::Yes
            }
            _ => Accept::No,
        }
    }

    /// Join the association file at `path` through both ID tables.
    pub fn join(self, path: &Path, delimiter: char) -> CostarResult<Dataset> {
        let mut relation = self.cast();
        let report = read_pairs(path, delimiter, |movie_id, actor_id| {
            self.associate(&mut relation, movie_id, actor_id)
        })?;
        Ok(self.into_dataset(relation, report))
    }

    /// [`Catalog::join`] over an in-memory association list.
    pub fn join_from<R: Read>(self, input: R, origin: &Path, delimiter: char) -> CostarResult<Dataset> {
        let mut relation = self.cast();
        let report = read_pairs_from(input, origin, delimiter, |movie_id, actor_id| {
            self.associate(&mut relation, movie_id, actor_id)
        })?;
        Ok(self.into_dataset(relation, report))
    }

    fn into_dataset(self, relation: RelationTable, report: IngestReport) -> Dataset {
        let mut reports = self.reports;
        reports.push(report);
        Dataset { relation, reports }
    }
}
