//! Person domain model.
//!
//! # Invariants
//! - Values are carried as SQLite returned them; `people(name, age)` may be
//!   untyped, so `Age` keeps integer, real and text storage classes apart.
//! - A NULL `name` becomes an empty string in both console and CSV output.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Age value as stored in `people.age`.
///
/// Serialized untagged so CSV cells hold the bare value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Age {
    Integer(i64),
    Real(f64),
    /// Text or blob storage; SQLite sorts these above every number, so they
    /// pass any numeric `>=` filter.
    Text(String),
}

impl Display for Age {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            // Why: the CSV writer prints whole reals as `50.0`; console output matches.
            Self::Real(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Self::Real(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One row of the `people` table.
///
/// Serialized with `Name`/`Age` field names to match the exported CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: Age,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self::with_age(name, Age::Integer(age))
    }

    /// Creates a person with an age of any storage class.
    pub fn with_age(name: impl Into<String>, age: Age) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Age;

    #[test]
    fn age_display_matches_stored_value() {
        assert_eq!(Age::Integer(52).to_string(), "52");
        assert_eq!(Age::Real(50.5).to_string(), "50.5");
        assert_eq!(Age::Real(60.0).to_string(), "60.0");
        assert_eq!(Age::Text("unknown".to_string()).to_string(), "unknown");
    }
}
