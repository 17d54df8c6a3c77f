//! Change batch application
//!
//! Validates and applies playlist removals, additions and updates against
//! a [`Dataset`](crate::model::Dataset). Problems are collected as
//! [`Notice`]s rather than returned as errors.

mod engine;
mod notice;

pub use engine::{apply_changes, ChangeBatch, UpdateEngine};
pub use notice::{ApplyReport, Notice};
