//! `elderscan` command-line entry point.
//!
//! # Responsibility
//! - Parse flags, set up logging, resolve the data directory.
//! - Run the report and map any failure to exit code 1.

use clap::Parser;
use elderscan_core::{default_log_level, init_logging, run_report, LogSink, ReportPaths};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

/// Print people aged 50 or older from `social_network.db` and export them to
/// `old_people.csv`.
#[derive(Debug, Parser)]
#[command(name = "elderscan", version, about)]
struct Cli {
    /// Directory holding `social_network.db`; `old_people.csv` is written
    /// there too. Defaults to the directory of this executable.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr otherwise.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = run(cli);
    log::logger().flush();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let (sink, fallback_level) = match cli.log_dir.as_deref() {
        Some(dir) => (LogSink::directory(dir)?, default_log_level()),
        // Why: a successful run should print only report lines.
        None => (LogSink::Stderr, "warn"),
    };
    let level = cli.log_level.as_deref().unwrap_or(fallback_level);
    init_logging(level, sink)?;

    let paths = ReportPaths::resolve(cli.data_dir.as_deref())
        .map_err(|err| format!("cannot resolve data directory: {err}"))?;

    let stdout = std::io::stdout();
    let summary = run_report(&paths, &mut stdout.lock()).map_err(|err| err.to_string())?;

    info!(
        "event=cli_done module=cli status=ok rows={} csv_path={}",
        summary.rows,
        summary.csv_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["elderscan"]).unwrap();
        assert!(cli.data_dir.is_none());
        assert!(cli.log_level.is_none());
        assert!(cli.log_dir.is_none());
    }

    #[test]
    fn parses_data_dir_and_logging_flags() {
        let cli = Cli::try_parse_from([
            "elderscan",
            "--data-dir",
            "/srv/people",
            "--log-level",
            "debug",
            "--log-dir",
            "/var/log/elderscan",
        ])
        .unwrap();
        assert_eq!(cli.data_dir.as_deref(), Some(Path::new("/srv/people")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.log_dir.as_deref(), Some("/var/log/elderscan"));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["elderscan", "extra"]).is_err());
    }
}
