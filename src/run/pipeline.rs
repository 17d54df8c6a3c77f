//! Load, apply and save orchestration

use super::config::MixtapeConfig;
use crate::snapshot::{load_dataset, read_changes, save_dataset};
use crate::update::{apply_changes, ApplyReport};
use crate::validation::{validate_output, IntegrityIssue};
use anyhow::Result;

/// What a completed run did
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Changes applied and skipped
    pub report: ApplyReport,

    pub user_count: usize,
    pub song_count: usize,
    pub playlist_count: usize,

    /// Output integrity issues, if validation ran
    pub issues: Option<Vec<IntegrityIssue>>,
}

/// Main run pipeline
pub struct MixtapePipeline {
    config: MixtapeConfig,
}

impl MixtapePipeline {
    pub fn new(config: MixtapeConfig) -> Self {
        Self { config }
    }

    /// Run the complete load/apply/save process.
    ///
    /// Read and decode failures abort before anything is written.
    pub fn run(&self) -> Result<RunSummary> {
        // Step 1: Load the snapshot and the changes
        let mut dataset = load_dataset(&self.config.input)?;

        log::info!("Reading changes from {:?}", self.config.changes);
        let batch = read_changes(&self.config.changes)?;

        // Step 2: Apply
        let report = apply_changes(&mut dataset, batch);
        log_report(&report);

        let user_count = dataset.user_count();
        let song_count = dataset.song_count();
        let playlist_count = dataset.playlist_count();

        // Step 3: Save
        save_dataset(&self.config.output, dataset, self.config.pretty)?;

        // Step 4: Optional round-trip check
        let issues = if self.config.validate {
            Some(validate_output(&self.config.output)?)
        } else {
            None
        };

        Ok(RunSummary {
            report,
            user_count,
            song_count,
            playlist_count,
            issues,
        })
    }
}

fn log_report(report: &ApplyReport) {
    for notice in &report.notices {
        log::warn!("{}", notice);
    }

    log::info!(
        "Applied changes: {} removed, {} added, {} updated ({} songs appended), {} skipped",
        report.removed,
        report.added,
        report.updated,
        report.songs_appended,
        report.notices.len()
    );
}
