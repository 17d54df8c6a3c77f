use super::{Playlist, Song, User};
use std::collections::HashMap;

/// In-memory users, songs and playlists, each indexed by ID
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    users: HashMap<String, User>,
    songs: HashMap<String, Song>,
    playlists: HashMap<String, Playlist>,
}

impl Dataset {
    /// Create a new empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from loaded records.
    ///
    /// References between records are not checked here; the snapshot is
    /// trusted. A repeated ID replaces the earlier record of the same type.
    pub fn load(
        users: impl IntoIterator<Item = User>,
        songs: impl IntoIterator<Item = Song>,
        playlists: impl IntoIterator<Item = Playlist>,
    ) -> Self {
        let mut dataset = Self::new();

        for user in users {
            if let Some(previous) = dataset.users.insert(user.id.clone(), user) {
                log::warn!("Duplicate user ID {} in snapshot, keeping the last one", previous.id);
            }
        }
        for song in songs {
            if let Some(previous) = dataset.songs.insert(song.id.clone(), song) {
                log::warn!("Duplicate song ID {} in snapshot, keeping the last one", previous.id);
            }
        }
        for playlist in playlists {
            if let Some(previous) = dataset.playlists.insert(playlist.id.clone(), playlist) {
                log::warn!(
                    "Duplicate playlist ID {} in snapshot, keeping the last one",
                    previous.id
                );
            }
        }

        dataset
    }

    /// Take all records out as lists sorted by ID
    pub fn export_all(self) -> (Vec<User>, Vec<Song>, Vec<Playlist>) {
        (
            sorted_values(self.users),
            sorted_values(self.songs),
            sorted_values(self.playlists),
        )
    }

    /// Check if a user exists
    pub fn has_user(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    /// Check if a song exists
    pub fn has_song(&self, id: &str) -> bool {
        self.songs.contains_key(id)
    }

    /// Check if a playlist exists
    pub fn has_playlist(&self, id: &str) -> bool {
        self.playlists.contains_key(id)
    }

    /// Get a user by ID
    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Get a song by ID
    pub fn get_song(&self, id: &str) -> Option<&Song> {
        self.songs.get(id)
    }

    /// Get a playlist by ID
    pub fn get_playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.get(id)
    }

    /// Insert or replace a playlist under its own ID
    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.insert(playlist.id.clone(), playlist);
    }

    /// Remove a playlist, returning it if it was present
    pub fn remove_playlist(&mut self, id: &str) -> Option<Playlist> {
        self.playlists.remove(id)
    }

    /// Get all playlists
    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    /// Total number of users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Total number of songs
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

fn sorted_values<T>(map: HashMap<String, T>) -> Vec<T> {
    let mut entries: Vec<(String, T)> = map.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries.into_iter().map(|(_, value)| value).collect()
}
