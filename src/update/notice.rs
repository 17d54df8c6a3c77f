//! Advisory notices for skipped changes

use thiserror::Error;

/// A change (or part of one) that was skipped while applying a batch.
///
/// Notices never stop the batch; the caller decides how to show them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Notice {
    #[error("Could not find playlist {playlist_id} for removal, skipping")]
    PlaylistNotFoundForRemoval { playlist_id: String },

    #[error("Playlist {playlist_id} already exists, skipping new playlist")]
    PlaylistAlreadyExists { playlist_id: String },

    #[error("No user found with ID {user_id}, skipping new playlist {playlist_id}")]
    UnknownUser {
        playlist_id: String,
        user_id: String,
    },

    #[error("No existing songs for new playlist {playlist_id}, skipping")]
    NoExistingSongs { playlist_id: String },

    #[error("No playlist found with ID {playlist_id}, skipping update")]
    UnknownPlaylist { playlist_id: String },

    #[error("No song found with ID {song_id}, not adding it to playlist {playlist_id}")]
    UnknownSong {
        playlist_id: String,
        song_id: String,
    },
}

/// Outcome of applying one change batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Skipped changes, in the order they were encountered
    pub notices: Vec<Notice>,

    /// Playlists removed
    pub removed: usize,

    /// New playlists added
    pub added: usize,

    /// Update records whose target playlist existed
    pub updated: usize,

    /// Songs appended across all updates
    pub songs_appended: usize,
}

impl ApplyReport {
    /// True when nothing in the batch was skipped
    pub fn is_clean(&self) -> bool {
        self.notices.is_empty()
    }
}
