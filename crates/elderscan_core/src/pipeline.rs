//! End-to-end report run: query, print, export.
//!
//! # Responsibility
//! - Scope one database connection to the query stage.
//! - Feed the same fetched list to the console and CSV stages.
//!
//! # Invariants
//! - A failed query produces no console output and no CSV.
//! - An export failure after printing leaves console output in place.

use crate::db::open_db_read_only;
use crate::model::person::Person;
use crate::paths::ReportPaths;
use crate::report::console::print_people;
use crate::report::csv_export::{save_people_csv, ExportError};
use crate::repo::person_repo::{RepoError, RepoResult, SqlitePersonRepository};
use crate::service::people_service::PeopleService;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type ReportResult<T> = Result<T, ReportError>;

/// Failure of one report stage.
#[derive(Debug)]
pub enum ReportError {
    Query(RepoError),
    Print(io::Error),
    Export(ExportError),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query(err) => write!(f, "query failed: {err}"),
            Self::Print(err) => write!(f, "failed to print report: {err}"),
            Self::Export(err) => write!(f, "export failed: {err}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Query(err) => Some(err),
            Self::Print(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<RepoError> for ReportError {
    fn from(value: RepoError) -> Self {
        Self::Query(value)
    }
}

impl From<ExportError> for ReportError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

/// Outcome of a successful report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub rows: usize,
    pub csv_path: PathBuf,
}

/// Fetches every old person from the database at `db_path`.
///
/// Opens one read-only connection and closes it before returning.
pub fn fetch_old_people(db_path: impl AsRef<Path>) -> RepoResult<Vec<Person>> {
    let conn = open_db_read_only(db_path)?;
    let people = {
        let service = PeopleService::new(SqlitePersonRepository::try_new(&conn)?);
        service.old_people()?
    };
    conn.close().map_err(|(_, err)| RepoError::from(err))?;
    Ok(people)
}

/// Runs the full report against `paths`, printing to `out`.
///
/// # Errors
/// - `ReportError::Query` before anything is printed or written.
/// - `ReportError::Print` when `out` rejects a line.
/// - `ReportError::Export` when the CSV cannot be written.
pub fn run_report<W: Write>(paths: &ReportPaths, out: &mut W) -> ReportResult<ReportSummary> {
    let started_at = Instant::now();
    info!(
        "event=report_run module=pipeline status=start db_path={} csv_path={}",
        paths.db_path.display(),
        paths.csv_path.display()
    );

    let result = run_stages(paths, out);

    match &result {
        Ok(summary) => info!(
            "event=report_run module=pipeline status=ok rows={} duration_ms={}",
            summary.rows,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=report_run module=pipeline status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}

fn run_stages<W: Write>(paths: &ReportPaths, out: &mut W) -> ReportResult<ReportSummary> {
    let people = fetch_old_people(&paths.db_path)?;
    print_people(out, &people).map_err(ReportError::Print)?;
    save_people_csv(&people, &paths.csv_path)?;

    Ok(ReportSummary {
        rows: people.len(),
        csv_path: paths.csv_path.clone(),
    })
}
