//! Command execution and console rendering.

use std::collections::BTreeSet;
use std::io::Write;

use costar_core::{CostarError, CostarResult, LabelSet};
use costar_engine::analytics;
use costar_engine::{Center, CenterSummary, LabeledGraph, PathQuery, RankOrder};

use crate::commands::{Command, ParseError, USAGE};

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop.
    Quit,
}

/// The built graph plus the current center of the universe.
pub struct Universe {
    graph: LabeledGraph,
    center: Center,
}

impl Universe {
    /// Center the universe on `center`; it must be in the graph.
    pub fn new(graph: LabeledGraph, center: &str) -> CostarResult<Self> {
        let center = Center::establish(&graph, center)?;
        Ok(Self { graph, center })
    }

    /// The underlying graph.
    pub fn graph(&self) -> &LabeledGraph {
        &self.graph
    }

    /// The current center.
    pub fn center(&self) -> &Center {
        &self.center
    }

    /// Run one command, returning the lines to print.
    pub fn execute(&mut self, command: &Command) -> CostarResult<(Vec<String>, Flow)> {
        let lines = match command {
            Command::Centers(n) => self.centers(*n)?,
            Command::Degrees { low, high } => self.degrees(*low, *high),
            Command::Infinite => self.infinite(),
            Command::Path(name) => self.path(name),
            Command::Separation { low, high } => self.separation(*low, *high),
            Command::Recenter(name) => self.recenter(name)?,
            Command::Help => USAGE.lines().map(str::to_string).collect(),
            Command::Quit => return Ok((vec!["Game quit".to_string()], Flow::Quit)),
        };
        Ok((lines, Flow::Continue))
    }

    fn centers(&self, n: i64) -> CostarResult<Vec<String>> {
        let (order, count) = RankOrder::from_signed(n);
        let ranked = analytics::rank_by_average_separation(&self.graph, count, order)?;
        let which = match order {
            RankOrder::Ascending => "top",
            RankOrder::Descending => "bottom",
        };
        let mut lines = vec![format!(
            "The {which} {count} centers of the universe sorted by average separation are:"
        )];
        lines.extend(
            ranked
                .iter()
                .map(|r| format!("{} ({:.4})", r.vertex, r.average_separation)),
        );
        Ok(lines)
    }

    fn degrees(&self, low: usize, high: usize) -> Vec<String> {
        let hits = analytics::vertices_in_degree_range(&self.graph, low, high);
        if hits.is_empty() {
            return vec!["There are no actors within these two degrees".to_string()];
        }
        hits.into_iter()
            .map(|(actor, degree)| format!("{actor} has this many degrees: {degree}"))
            .collect()
    }

    fn infinite(&self) -> Vec<String> {
        let missing: BTreeSet<String> = self.center.unreachable(&self.graph);
        if missing.is_empty() {
            return vec!["No actors with infinite separation".to_string()];
        }
        let mut lines = vec!["Actors with infinite separation:".to_string()];
        lines.extend(missing);
        lines
    }

    fn path(&self, name: &str) -> Vec<String> {
        match self.center.path_from(&self.graph, name) {
            PathQuery::UnknownVertex => vec![format!("{name} is not part of this universe")],
            PathQuery::Unreachable => vec![format!(
                "{name} has infinite separation from {}",
                self.center.name()
            )],
            PathQuery::Found(hops) => {
                let mut lines = vec![format!("{name}'s number is {}", hops.len())];
                lines.extend(hops.iter().map(|hop| {
                    format!(
                        "{} appeared in {} with {}",
                        hop.from,
                        format_labels(&hop.labels),
                        hop.to
                    )
                }));
                lines
            }
        }
    }

    fn separation(&self, low: usize, high: usize) -> Vec<String> {
        let hits = self.center.within_separation(low, high);
        if hits.is_empty() {
            return vec!["No actors found within the separation bounds given".to_string()];
        }
        hits.into_iter()
            .map(|(actor, d)| format!("{actor} is separated from the current center by {d}"))
            .collect()
    }

    fn recenter(&mut self, name: &str) -> CostarResult<Vec<String>> {
        match Center::recenter(&self.graph, name)? {
            Some(center) => {
                self.center = center;
                Ok(vec![format_summary(&self.center.summary(&self.graph))])
            }
            None => Ok(vec![format!("{name} is not part of this universe")]),
        }
    }
}

/// Parse and run one line, writing its output to `out`.
///
/// Returns `false` once the loop should stop. Blank lines do nothing; lines
/// that do not parse print the error and the usage text.
pub fn dispatch<W: Write>(universe: &mut Universe, line: &str, out: &mut W) -> anyhow::Result<bool> {
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(ParseError::Empty) => return Ok(true),
        Err(e) => {
            writeln!(out, "{e}")?;
            writeln!(out, "{USAGE}")?;
            return Ok(true);
        }
    };
    let (lines, flow) = universe.execute(&command)?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(flow == Flow::Continue)
}

/// `[A, B]`, in label order.
pub fn format_labels(labels: &LabelSet) -> String {
    let joined: Vec<&str> = labels.iter().map(String::as_str).collect();
    format!("[{}]", joined.join(", "))
}

/// The recenter announcement.
pub fn format_summary(summary: &CenterSummary) -> String {
    format!(
        "{} is now the center of the acting universe, connected to {}/{} actors with average separation of {}",
        summary.center, summary.reachable, summary.total, summary.average_separation
    )
}

/// Message for a configured center that is missing from the data.
pub fn missing_center(err: &CostarError) -> Option<String> {
    match err {
        CostarError::VertexNotFound { vertex } => {
            Some(format!("{vertex} is not part of this universe"))
        }
        _ => None,
    }
}
