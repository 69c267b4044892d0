//! Command-line flags and how they layer over the config file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use costar_core::{BuildStrategy, CostarConfig};

#[derive(Parser, Debug)]
#[command(name = "costar", version, about = "Six degrees of separation over a movie database")]
pub struct Args {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Movie table (`id|title`)
    #[arg(long)]
    pub movies: Option<PathBuf>,

    /// Actor table (`id|name`)
    #[arg(long)]
    pub actors: Option<PathBuf>,

    /// Association list (`movie_id|actor_id`)
    #[arg(long)]
    pub associations: Option<PathBuf>,

    /// Initial center of the universe
    #[arg(long)]
    pub center: Option<String>,

    /// Pair discovery strategy for the graph build
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Log filter, e.g. `info` or `costar_engine=debug` (overrides RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,

    /// File to load prompt history from and save it to
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Run these commands instead of the interactive prompt
    #[arg(short = 'e', long = "exec")]
    pub exec: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Inverted,
    Pairwise,
}

impl From<StrategyArg> for BuildStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Inverted => BuildStrategy::Inverted,
            StrategyArg::Pairwise => BuildStrategy::Pairwise,
        }
    }
}

impl Args {
    /// The config file (or defaults) with every given flag applied on top.
    pub fn resolve_config(&self) -> Result<CostarConfig> {
        let mut config = match &self.config {
            Some(path) => CostarConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => CostarConfig::new(),
        };
        if let Some(movies) = &self.movies {
            config.data.movies = movies.clone();
        }
        if let Some(actors) = &self.actors {
            config.data.actors = actors.clone();
        }
        if let Some(associations) = &self.associations {
            config.data.associations = associations.clone();
        }
        if let Some(center) = &self.center {
            config = config.center(center.clone());
        }
        if let Some(strategy) = self.strategy {
            config = config.strategy(strategy.into());
        }
        config.validate()?;
        Ok(config)
    }

    /// Log filter from `--log`, else `RUST_LOG`, else `warn`.
    ///
    /// A malformed `--log` directive is an error rather than being dropped.
    pub fn log_filter(&self) -> Result<EnvFilter> {
        match &self.log {
            Some(directive) => EnvFilter::try_new(directive)
                .with_context(|| format!("invalid --log filter '{directive}'")),
            None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))),
        }
    }
}
