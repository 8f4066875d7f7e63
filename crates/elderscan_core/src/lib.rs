//! Core logic for elderscan: find people aged 50+ in a social network
//! SQLite database, print them, and export them to CSV.

pub mod db;
pub mod logging;
pub mod model;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogSink};
pub use model::person::{Age, Person};
pub use paths::{program_dir, ReportPaths, CSV_FILE_NAME, DB_FILE_NAME};
pub use pipeline::{fetch_old_people, run_report, ReportError, ReportResult, ReportSummary};
pub use report::console::{format_person_line, print_people};
pub use report::csv_export::{read_people_csv, save_people_csv, ExportError, CSV_HEADER};
pub use repo::person_repo::{
    PersonQuery, PersonRepository, RepoError, RepoResult, ResultOrder, SqlitePersonRepository,
};
pub use service::people_service::{PeopleService, OLD_AGE_THRESHOLD};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
