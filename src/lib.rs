//! Mixtape - batch playlist updates over a JSON snapshot
//!
//! This library loads a snapshot of users, songs and playlists, applies a
//! batch of playlist additions, removals and updates, and writes the
//! resulting snapshot back out.

pub mod model;
pub mod run;
pub mod snapshot;
pub mod update;
pub mod validation;

pub use run::config::MixtapeConfig;
pub use run::pipeline::MixtapePipeline;
