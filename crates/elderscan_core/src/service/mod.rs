//! Core use-case services.
//!
//! # Responsibility
//! - Turn repository queries into named use cases.
//! - Keep CLI callers decoupled from SQL details.

pub mod people_service;
