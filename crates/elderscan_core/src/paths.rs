//! Input/output path resolution.
//!
//! # Responsibility
//! - Place the database and CSV inside one explicit data directory.
//! - Fall back to the running executable's directory when none is given.
//!
//! # Invariants
//! - Resolved paths are absolute, independent of later working-directory
//!   changes.
//! - File names are fixed; only the directory is configurable.

use std::io;
use std::path::{Path, PathBuf};

/// Database file read by the query stage.
pub const DB_FILE_NAME: &str = "social_network.db";
/// CSV file written by the export stage.
pub const CSV_FILE_NAME: &str = "old_people.csv";

/// Absolute locations of the report input and output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub db_path: PathBuf,
    pub csv_path: PathBuf,
}

impl ReportPaths {
    /// Builds paths for the fixed file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            db_path: dir.join(DB_FILE_NAME),
            csv_path: dir.join(CSV_FILE_NAME),
        }
    }

    /// Resolves paths from an optional configured directory.
    ///
    /// - `Some(dir)`: used as-is when absolute, otherwise joined onto the
    ///   current working directory.
    /// - `None`: the directory of the running executable.
    ///
    /// # Errors
    /// - Returns `io::Error` when the current or executable directory cannot
    ///   be determined.
    pub fn resolve(data_dir: Option<&Path>) -> io::Result<Self> {
        let dir = match data_dir {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => std::env::current_dir()?.join(dir),
            None => program_dir()?,
        };
        Ok(Self::in_dir(dir))
    }
}

/// Returns the absolute directory containing the running executable.
///
/// # Errors
/// - Returns `io::Error` when the executable path is unavailable or has no
///   parent directory.
pub fn program_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable `{}` has no parent directory", exe.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{program_dir, ReportPaths, CSV_FILE_NAME, DB_FILE_NAME};
    use std::path::Path;

    #[test]
    fn in_dir_joins_fixed_file_names() {
        let paths = ReportPaths::in_dir("/srv/data");
        assert_eq!(paths.db_path, Path::new("/srv/data").join(DB_FILE_NAME));
        assert_eq!(paths.csv_path, Path::new("/srv/data").join(CSV_FILE_NAME));
    }

    #[test]
    fn resolve_makes_relative_dir_absolute() {
        let paths = ReportPaths::resolve(Some(Path::new("reports"))).unwrap();
        assert!(paths.db_path.is_absolute());
        assert!(paths.db_path.ends_with("reports/social_network.db"));
    }

    #[test]
    fn resolve_without_dir_uses_program_dir() {
        let dir = program_dir().unwrap();
        assert!(dir.is_absolute());
        assert_eq!(
            ReportPaths::resolve(None).unwrap(),
            ReportPaths::in_dir(&dir)
        );
    }
}
