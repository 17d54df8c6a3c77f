//! Run configuration

use std::path::PathBuf;

/// Configuration for one load/apply/save run
#[derive(Debug, Clone)]
pub struct MixtapeConfig {
    /// Snapshot to load
    pub input: PathBuf,

    /// Change batch to apply
    pub changes: PathBuf,

    /// Where to write the resulting snapshot
    pub output: PathBuf,

    /// Indent the output JSON
    pub pretty: bool,

    /// Re-read and check the output after saving
    pub validate: bool,
}

impl MixtapeConfig {
    /// Create a new run configuration
    pub fn new(input: PathBuf, changes: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            changes,
            output,
            pretty: false,
            validate: false,
        }
    }

    /// Write indented JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Check the output snapshot after writing it
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
