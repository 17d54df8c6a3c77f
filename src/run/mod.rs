//! Run orchestration

pub mod config;
pub mod pipeline;

pub use config::MixtapeConfig;
pub use pipeline::{MixtapePipeline, RunSummary};
