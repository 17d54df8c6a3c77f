//! Validation utilities
//!
//! Re-reads a written snapshot and checks playlist references

mod integrity;

pub use integrity::{check_integrity, validate_output, IntegrityIssue};
