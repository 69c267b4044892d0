//! `costar`: interactive six-degrees explorer.
//!
//! Loads the movie, actor and association tables, builds the co-appearance
//! graph and answers commands about the current center of the universe.
//!
//! ```text
//! costar --center "Kevin Bacon" --history ~/.costar_history
//! costar --config costar.toml -e "p Tom Hanks" -e "c 10"
//! ```

mod app;
mod args;
mod commands;

use std::io;
use std::path::Path;

use anyhow::{anyhow, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use costar_core::CostarConfig;
use costar_engine::GraphBuilder;
use costar_ingest::load_dataset;

use app::{dispatch, missing_center, Universe};
use args::Args;
use commands::USAGE;

fn load_universe(config: &CostarConfig) -> Result<Universe> {
    let dataset = load_dataset(config)?;
    for report in &dataset.reports {
        tracing::info!(%report, "ingest");
    }
    if dataset.skipped() > 0 {
        tracing::warn!(skipped = dataset.skipped(), "malformed or unresolvable records were skipped");
    }

    let graph = GraphBuilder::new()
        .strategy(config.build.strategy)
        .build(&dataset.relation)?;

    Universe::new(graph, &config.center).map_err(|e| match missing_center(&e) {
        Some(message) => anyhow!(message),
        None => e.into(),
    })
}

fn run_interactive(universe: &mut Universe, history: Option<&Path>) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    if let Some(path) = history.filter(|p| p.exists()) {
        if let Err(e) = editor.load_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not load history");
        }
    }

    println!("{}", app::format_summary(&universe.center().summary(universe.graph())));
    println!("{USAGE}");

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if !dispatch(universe, &line, &mut io::stdout())? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = history {
        if let Err(e) = editor.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not save history");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(args.log_filter()?)
        .with_writer(io::stderr)
        .try_init();

    let config = args.resolve_config()?;
    let mut universe = load_universe(&config)?;

    if args.exec.is_empty() {
        run_interactive(&mut universe, args.history.as_deref())
    } else {
        let mut stdout = io::stdout().lock();
        for line in &args.exec {
            if !dispatch(&mut universe, line, &mut stdout)? {
                break;
            }
        }
        Ok(())
    }
}
