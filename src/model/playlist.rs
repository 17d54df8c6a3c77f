use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents a playlist owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique identifier
    pub id: String,

    /// Owning user (references User::id)
    pub user_id: String,

    /// Song IDs in play order. Duplicates are allowed.
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub song_ids: Vec<String>,

    /// Fields the engine does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Songs to append to an existing playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistUpdate {
    /// Target playlist (references Playlist::id)
    pub playlist_id: String,

    /// Song IDs to append, in order
    #[serde(
        default,
        alias = "new_song_ids",
        deserialize_with = "super::null_as_empty"
    )]
    pub song_ids: Vec<String>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, song_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            song_ids,
            extra: Map::new(),
        }
    }

    /// Append a song to the end of this playlist
    pub fn add_song(&mut self, song_id: String) {
        self.song_ids.push(song_id);
    }

    /// Number of songs in this playlist
    pub fn len(&self) -> usize {
        self.song_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.song_ids.is_empty()
    }
}

impl PlaylistUpdate {
    /// Create an update appending `song_ids` to a playlist
    pub fn new(playlist_id: impl Into<String>, song_ids: Vec<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            song_ids,
        }
    }
}
