//! Snapshot files
//!
//! A snapshot is the full set of users, songs and playlists at a point in
//! time, stored as JSON lists. This module converts between that list form
//! and the keyed [`Dataset`].

mod codec;

pub use codec::{read_changes, read_snapshot, write_snapshot};

use crate::model::{Dataset, Playlist, Song, User};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized form of a dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub users: Vec<User>,

    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub playlists: Vec<Playlist>,

    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub songs: Vec<Song>,
}

impl From<Snapshot> for Dataset {
    fn from(snapshot: Snapshot) -> Self {
        Dataset::load(snapshot.users, snapshot.songs, snapshot.playlists)
    }
}

impl From<Dataset> for Snapshot {
    fn from(dataset: Dataset) -> Self {
        let (users, songs, playlists) = dataset.export_all();
        Snapshot {
            users,
            playlists,
            songs,
        }
    }
}

/// Load a snapshot file into a dataset
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    log::info!("Loading snapshot from {:?}", path);
    let dataset = Dataset::from(read_snapshot(path)?);

    log::info!(
        "Loaded dataset: {} users, {} songs, {} playlists",
        dataset.user_count(),
        dataset.song_count(),
        dataset.playlist_count()
    );

    Ok(dataset)
}

/// Write a dataset out as a snapshot file
pub fn save_dataset(path: &Path, dataset: Dataset, pretty: bool) -> Result<()> {
    log::info!("Saving snapshot to {:?}", path);
    write_snapshot(path, &Snapshot::from(dataset), pretty)
}
