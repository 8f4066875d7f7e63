//! Domain model for social network people.
//!
//! # Responsibility
//! - Define the record shape shared by query, console and CSV stages.
//!
//! # Invariants
//! - Records are read-only snapshots; nothing in core mutates stored rows.

pub mod person;
