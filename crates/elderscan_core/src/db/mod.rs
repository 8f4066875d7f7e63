//! SQLite connection entry points.
//!
//! # Responsibility
//! - Open the social network database for read-only access.
//! - Map driver failures into one crate-level error type.
//!
//! # Invariants
//! - The database file is never created or written by this crate.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::open_db_read_only;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
