//! Repository layer for the `people` table.
//!
//! # Responsibility
//! - Define query contracts over externally owned social network data.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Repositories only read; the schema is owned by whoever created the file.
//! - Schema mismatches surface as `RepoError::Schema`, not driver noise.

pub mod person_repo;
