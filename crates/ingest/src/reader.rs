//! Two-column delimited record reader.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use costar_core::{CostarError, CostarResult};

/// Per-file load statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// File the records came from.
    pub path: PathBuf,
    /// Records accepted.
    pub records: usize,
    /// Records skipped as malformed or unresolvable.
    pub skipped: usize,
}

impl IngestReport {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            ..Self::default()
        }
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} records, {} skipped",
            self.path.display(),
            self.records,
            self.skipped
        )
    }
}

/// Outcome a record handler reports back to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    /// The record was used.
    Yes,
    /// The record was well formed but could not be used.
    No,
}

/// Read `left|right` records from the file at `path`.
pub fn read_pairs<F>(path: &Path, delimiter: char, on_record: F) -> CostarResult<IngestReport>
where
    F: FnMut(&str, &str) -> Accept,
{
    let file = File::open(path).map_err(|source| CostarError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_pairs_from(file, path, delimiter, on_record)
}

/// Read `left|right` records from any reader; `origin` names it in logs.
///
/// Lines with a field count other than two, or with an empty field, are
/// skipped. Fields are taken verbatim: no quoting, no trimming.
pub fn read_pairs_from<R, F>(
    input: R,
    origin: &Path,
    delimiter: char,
    mut on_record: F,
) -> CostarResult<IngestReport>
where
    R: Read,
    F: FnMut(&str, &str) -> Accept,
{
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| CostarError::config(format!("delimiter {delimiter:?} is not ASCII")))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut report = IngestReport::new(origin);
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                return Err(CostarError::Csv {
                    path: origin.to_path_buf(),
                    source: Box::new(e),
                })
            }
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                tracing::warn!(path = %origin.display(), line, error = %e, "skipping unreadable record");
                report.skipped += 1;
                continue;
            }
        };

        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 2 || record[0].is_empty() || record[1].is_empty() {
            tracing::warn!(
                path = %origin.display(),
                line,
                fields = record.len(),
                "bad separation, expected two non-empty fields"
            );
            report.skipped += 1;
            continue;
        }

        match on_record(&record[0], &record[1]) {
            Accept::Yes => report.records += 1,
            Accept::No => {
                tracing::warn!(path = %origin.display(), line, "skipping unresolvable record");
                report.skipped += 1;
            }
        }
    }

    tracing::info!(
        path = %origin.display(),
        records = report.records,
        skipped = report.skipped,
        "table loaded"
    );
    Ok(report)
}
