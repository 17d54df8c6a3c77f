//! JSON reading and writing for snapshot and change files

use super::Snapshot;
use crate::update::ChangeBatch;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read a snapshot of users, songs and playlists
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let snapshot: Snapshot = read_json(path, "snapshot")?;
    log::debug!(
        "Read snapshot {:?}: {} users, {} songs, {} playlists",
        path,
        snapshot.users.len(),
        snapshot.songs.len(),
        snapshot.playlists.len()
    );
    Ok(snapshot)
}

/// Read a change batch
pub fn read_changes(path: &Path) -> Result<ChangeBatch> {
    let batch: ChangeBatch = read_json(path, "changes file")?;
    log::debug!(
        "Read changes {:?}: {} new, {} removals, {} updates",
        path,
        batch.new_playlists.len(),
        batch.remove_playlists.len(),
        batch.update_playlists.len()
    );
    Ok(batch)
}

/// Write a snapshot, replacing any existing file
pub fn write_snapshot(path: &Path, snapshot: &Snapshot, pretty: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output snapshot: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    let encoded = if pretty {
        serde_json::to_writer_pretty(&mut writer, snapshot)
    } else {
        serde_json::to_writer(&mut writer, snapshot)
    };
    encoded.with_context(|| format!("Failed to encode snapshot to {:?}", path))?;

    writer
        .flush()
        .with_context(|| format!("Failed to write snapshot: {:?}", path))?;
    writer
        .get_ref()
        .sync_all()
        .with_context(|| format!("Failed to sync snapshot to disk: {:?}", path))?;

    log::debug!("Wrote snapshot to {:?}", path);
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {}: {:?}", what, path))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}: {:?}", what, path))
}
