//! Runtime configuration.
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! center = "Kevin Bacon"
//! delimiter = "|"
//!
//! [data]
//! movies = "inputs/movies.txt"
//! actors = "inputs/actors.txt"
//! associations = "inputs/movie-actors.txt"
//!
//! [build]
//! strategy = "inverted"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CostarError, CostarResult};

/// Center of the universe used when none is configured.
pub const DEFAULT_CENTER: &str = "Kevin Bacon";

/// How the graph builder discovers actor pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStrategy {
    /// Index contexts to their actors and connect within each context.
    #[default]
    Inverted,
    /// Intersect the context sets of every actor pair.
    Pairwise,
}

/// Locations of the three input tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPaths {
    /// `id|title` movie table.
    #[serde(default = "default_movies")]
    pub movies: PathBuf,
    /// `id|name` actor table.
    #[serde(default = "default_actors")]
    pub actors: PathBuf,
    /// `movie_id|actor_id` association list.
    #[serde(default = "default_associations")]
    pub associations: PathBuf,
}

fn default_movies() -> PathBuf {
    PathBuf::from("inputs/movies.txt")
}

fn default_actors() -> PathBuf {
    PathBuf::from("inputs/actors.txt")
}

fn default_associations() -> PathBuf {
    PathBuf::from("inputs/movie-actors.txt")
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            movies: default_movies(),
            actors: default_actors(),
            associations: default_associations(),
        }
    }
}

/// Graph construction options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Pair discovery strategy.
    #[serde(default)]
    pub strategy: BuildStrategy,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostarConfig {
    /// Initial center of the universe.
    #[serde(default = "default_center")]
    pub center: String,
    /// Field separator of the input tables.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Input file locations.
    #[serde(default)]
    pub data: DataPaths,
    /// Graph construction options.
    #[serde(default)]
    pub build: BuildOptions,
}

fn default_center() -> String {
    DEFAULT_CENTER.to_string()
}

fn default_delimiter() -> char {
    '|'
}

impl Default for CostarConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            delimiter: default_delimiter(),
            data: DataPaths::default(),
            build: BuildOptions::default(),
        }
    }
}

impl CostarConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> CostarResult<Self> {
        let config: CostarConfig =
            toml::from_str(s).map_err(|e| CostarError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> CostarResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CostarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the initial center.
    pub fn center(mut self, center: impl Into<String>) -> Self {
        self.center = center.into();
        self
    }

    /// Set the field separator.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the input file locations.
    pub fn data(mut self, data: DataPaths) -> Self {
        self.data = data;
        self
    }

    /// Set the build strategy.
    pub fn strategy(mut self, strategy: BuildStrategy) -> Self {
        self.build.strategy = strategy;
        self
    }

    /// Reject settings the reader cannot honour.
    pub fn validate(&self) -> CostarResult<()> {
        if !self.delimiter.is_ascii() || self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(CostarError::config(format!(
                "delimiter must be a single ASCII character other than a line break, got {:?}",
                self.delimiter
            )));
        }
        if self.center.trim().is_empty() {
            return Err(CostarError::config("center must not be empty"));
        }
        Ok(())
    }
}
