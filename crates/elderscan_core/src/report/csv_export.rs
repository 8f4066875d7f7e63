//! CSV export of person lists.
//!
//! # Responsibility
//! - Write `Name,Age` files that mirror the fetched order.
//! - Read exported files back for verification.
//!
//! # Invariants
//! - The header row is always written, even for an empty list.
//! - Existing files are truncated, never appended to.
//! - Rows end with `\n` and carry no index column.

use crate::model::person::Person;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Header row of exported files.
pub const CSV_HEADER: [&str; 2] = ["Name", "Age"];

pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while writing or reading a person CSV.
#[derive(Debug)]
pub enum ExportError {
    Csv { path: PathBuf, source: csv::Error },
    Io { path: PathBuf, source: io::Error },
    Header { path: PathBuf, found: Vec<String> },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv { path, source } => {
                write!(f, "csv error at `{}`: {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
            Self::Header { path, found } => write!(
                f,
                "unexpected header in `{}`: expected `{}`, found `{}`",
                path.display(),
                CSV_HEADER.join(","),
                found.join(",")
            ),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Header { .. } => None,
        }
    }
}

/// Writes `people` to `path` as `Name,Age` CSV, replacing any existing file.
///
/// # Side effects
/// - Creates or truncates `path`.
/// - Emits `csv_export` logging events.
///
/// # Errors
/// - Returns `ExportError` when the file cannot be created or written.
pub fn save_people_csv(people: &[Person], path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    match write_people_csv(people, path) {
        Ok(()) => {
            info!(
                "event=csv_export module=report status=ok rows={} path={} duration_ms={}",
                people.len(),
                path.display(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=csv_export module=report status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Reads a file produced by [`save_people_csv`] back into people, in file order.
///
/// # Errors
/// - `ExportError::Header` when the first row is not `Name,Age`.
/// - `ExportError::Csv` when the file is unreadable or a row does not parse.
pub fn read_people_csv(path: impl AsRef<Path>) -> ExportResult<Vec<Person>> {
    let path = path.as_ref();
    let csv_err = |source: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = reader.headers().map_err(csv_err)?;
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(ExportError::Header {
            path: path.to_path_buf(),
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    reader
        .deserialize::<Person>()
        .map(|row| row.map_err(csv_err))
        .collect()
}

fn write_people_csv(people: &[Person], path: &Path) -> ExportResult<()> {
    let csv_err = |source: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Why: serde-driven headers are only emitted with the first record, and an
    // empty report must still carry `Name,Age`.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(csv_err)?;

    writer.write_record(CSV_HEADER).map_err(csv_err)?;
    for person in people {
        writer.serialize(person).map_err(csv_err)?;
    }

    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{read_people_csv, save_people_csv, ExportError};
    use crate::model::person::Person;

    #[test]
    fn names_with_commas_and_quotes_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quoted.csv");
        let people = vec![Person::new("Smith, \"Jo\"", 61)];

        save_people_csv(&people, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Name,Age\n\"Smith, \"\"Jo\"\"\",61\n");
        assert_eq!(read_people_csv(&path).unwrap(), people);
    }

    #[test]
    fn read_rejects_foreign_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foreign.csv");
        std::fs::write(&path, "name,age\nAlice,52\n").unwrap();

        let err = read_people_csv(&path).unwrap_err();
        assert!(matches!(err, ExportError::Header { ref found, .. } if found == &["name", "age"]));
    }
}
