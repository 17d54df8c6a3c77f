//! Referential integrity checks over a dataset

use crate::model::Dataset;
use crate::snapshot::{read_snapshot, Snapshot};
use anyhow::Result;
use std::fmt;
use std::path::Path;

/// A playlist reference that does not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// Owner is not a known user
    MissingUser { playlist_id: String, user_id: String },

    /// A listed song is not a known song
    MissingSong { playlist_id: String, song_id: String },

    /// Playlist lists no songs at all
    EmptyPlaylist { playlist_id: String },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::MissingUser {
                playlist_id,
                user_id,
            } => write!(f, "playlist {} is owned by unknown user {}", playlist_id, user_id),
            IntegrityIssue::MissingSong {
                playlist_id,
                song_id,
            } => write!(f, "playlist {} references unknown song {}", playlist_id, song_id),
            IntegrityIssue::EmptyPlaylist { playlist_id } => {
                write!(f, "playlist {} has no songs", playlist_id)
            }
        }
    }
}

/// Check every playlist's user and song references.
///
/// Issues are ordered by playlist ID. Repeated songs are not an issue.
pub fn check_integrity(dataset: &Dataset) -> Vec<IntegrityIssue> {
    let mut playlists: Vec<_> = dataset.playlists().collect();
    playlists.sort_by(|a, b| a.id.cmp(&b.id));

    let mut issues = Vec::new();
    for playlist in playlists {
        if !dataset.has_user(&playlist.user_id) {
            issues.push(IntegrityIssue::MissingUser {
                playlist_id: playlist.id.clone(),
                user_id: playlist.user_id.clone(),
            });
        }

        if playlist.is_empty() {
            issues.push(IntegrityIssue::EmptyPlaylist {
                playlist_id: playlist.id.clone(),
            });
        }

        for song_id in &playlist.song_ids {
            if !dataset.has_song(song_id) {
                issues.push(IntegrityIssue::MissingSong {
                    playlist_id: playlist.id.clone(),
                    song_id: song_id.clone(),
                });
            }
        }
    }

    issues
}

/// Re-read a written snapshot and check it.
///
/// Fails only if the file cannot be read or decoded; integrity problems
/// are logged and returned.
pub fn validate_output(path: &Path) -> Result<Vec<IntegrityIssue>> {
    log::info!("Validating snapshot at: {:?}", path);

    let snapshot: Snapshot = read_snapshot(path)?;
    let dataset = Dataset::from(snapshot);
    let issues = check_integrity(&dataset);

    if issues.is_empty() {
        log::info!(
            "Snapshot is consistent: {} users, {} songs, {} playlists",
            dataset.user_count(),
            dataset.song_count(),
            dataset.playlist_count()
        );
    } else {
        log::warn!("Found {} integrity issue(s):", issues.len());
        for issue in &issues {
            log::warn!("- {}", issue);
        }
    }

    Ok(issues)
}
