//! Filmography ingest.
//!
//! Three tables feed the graph:
//! - movies: `movie_id|title`
//! - actors: `actor_id|name`
//! - associations: `movie_id|actor_id`
//!
//! Malformed lines and associations naming unknown IDs are skipped with a
//! warning; they never abort a load.

pub mod catalog;
pub mod reader;

pub use catalog::{Catalog, Dataset};
pub use reader::IngestReport;

use costar_core::{CostarConfig, CostarResult};

/// Load all three tables named by `config` and join them.
pub fn load_dataset(config: &CostarConfig) -> CostarResult<Dataset> {
    let catalog = Catalog::load(&config.data.movies, &config.data.actors, config.delimiter)?;
    catalog.join(&config.data.associations, config.delimiter)
}
