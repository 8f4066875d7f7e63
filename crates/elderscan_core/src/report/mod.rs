//! Output stages for a fetched person list.
//!
//! # Responsibility
//! - Render people as console lines.
//! - Export people to CSV and read exports back.
//!
//! # Invariants
//! - Both consumers keep the input order; neither sorts.

pub mod console;
pub mod csv_export;
