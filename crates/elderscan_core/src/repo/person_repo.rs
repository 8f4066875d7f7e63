//! Person repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Verify the `people(name, age)` shape before querying.
//! - Run age-filtered selects and materialize every matching row.
//!
//! # Invariants
//! - The age filter is inclusive (`age >= min_age`).
//! - `ResultOrder::Engine` adds no `ORDER BY`; rows come back in whatever
//!   order SQLite yields.
//! - Every row SQLite returns is kept; values are converted, never rejected.

use crate::db::DbError;
use crate::model::person::{Age, Person};
use log::{error, info};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const PEOPLE_TABLE: &str = "people";
const REQUIRED_COLUMNS: &[&str] = &["name", "age"];

const PEOPLE_SELECT_SQL: &str = "SELECT
    name,
    age
FROM people
WHERE age >= ?1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person queries.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Schema(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Schema(message) => write!(f, "unexpected database schema: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Schema(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Row order for person listings.
///
/// The query has no natural order, so callers pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultOrder {
    /// No `ORDER BY`; SQLite's own row order (usually rowid order).
    #[default]
    Engine,
    /// Ascending by name.
    Name,
    /// Oldest first, ties broken by name.
    AgeDescending,
}

impl ResultOrder {
    fn order_by_clause(self) -> &'static str {
        match self {
            Self::Engine => "",
            Self::Name => " ORDER BY name ASC",
            Self::AgeDescending => " ORDER BY age DESC, name ASC",
        }
    }
}

/// Query options for listing people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonQuery {
    /// Inclusive lower bound on `age`.
    pub min_age: i64,
    pub order: ResultOrder,
}

impl PersonQuery {
    /// People whose age is at least `min_age`, in engine order.
    pub fn at_least(min_age: i64) -> Self {
        Self {
            min_age,
            order: ResultOrder::Engine,
        }
    }

    pub fn ordered_by(mut self, order: ResultOrder) -> Self {
        self.order = order;
        self
    }
}

/// Repository interface for person reads.
pub trait PersonRepository {
    fn list_people(&self, query: &PersonQuery) -> RepoResult<Vec<Person>>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Creates a repository after checking the `people` table shape.
    ///
    /// # Errors
    /// - `RepoError::Schema` when `people` or one of its required columns is
    ///   missing.
    /// - `RepoError::Db` when the file is not a readable database.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_people_schema(conn)?;
        Ok(Self { conn })
    }

    fn select_people(&self, sql: &str, min_age: i64) -> RepoResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params![min_age])?;
        let mut people = Vec::new();

        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }

        Ok(people)
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn list_people(&self, query: &PersonQuery) -> RepoResult<Vec<Person>> {
        let started_at = Instant::now();
        let sql = format!("{PEOPLE_SELECT_SQL}{};", query.order.order_by_clause());

        let result = self.select_people(&sql, query.min_age);

        match &result {
            Ok(people) => info!(
                "event=people_query module=repo status=ok min_age={} order={:?} rows={} duration_ms={}",
                query.min_age,
                query.order,
                people.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=people_query module=repo status=error min_age={} duration_ms={} error={}",
                query.min_age,
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }
}

fn ensure_people_schema(conn: &Connection) -> RepoResult<()> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let columns = stmt
        .query_map([PEOPLE_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    if columns.is_empty() {
        return Err(RepoError::Schema(format!(
            "table `{PEOPLE_TABLE}` does not exist"
        )));
    }

    for required in REQUIRED_COLUMNS {
        if !columns
            .iter()
            .any(|column| column.eq_ignore_ascii_case(required))
        {
            return Err(RepoError::Schema(format!(
                "table `{PEOPLE_TABLE}` has no column `{required}`"
            )));
        }
    }

    Ok(())
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let name = match row.get_ref("name")? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(value) => value.to_string(),
        ValueRef::Real(value) => value.to_string(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
    };

    let age = match row.get_ref("age")? {
        ValueRef::Integer(value) => Age::Integer(value),
        ValueRef::Real(value) => Age::Real(value),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Age::Text(String::from_utf8_lossy(bytes).into_owned())
        }
        // NULL never satisfies `age >= ?1`; kept total for custom filters.
        ValueRef::Null => Age::Text(String::new()),
    };

    Ok(Person { name, age })
}

#[cfg(test)]
mod tests {
    use super::{PersonQuery, ResultOrder};

    #[test]
    fn engine_order_adds_no_order_by() {
        assert_eq!(ResultOrder::Engine.order_by_clause(), "");
        assert_eq!(ResultOrder::default(), ResultOrder::Engine);
    }

    #[test]
    fn at_least_defaults_to_engine_order() {
        let query = PersonQuery::at_least(50);
        assert_eq!(query.min_age, 50);
        assert_eq!(query.order, ResultOrder::Engine);
        assert_eq!(
            query.ordered_by(ResultOrder::Name).order,
            ResultOrder::Name
        );
    }
}
