//! Applies a change batch to a dataset

use super::notice::{ApplyReport, Notice};
use crate::model::{Dataset, Playlist, PlaylistUpdate};
use serde::{Deserialize, Serialize};

/// Additions, removals and updates to apply in one pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeBatch {
    /// Playlists to create
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub new_playlists: Vec<Playlist>,

    /// Playlist IDs to delete
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub remove_playlists: Vec<String>,

    /// Songs to append to existing playlists
    #[serde(default, deserialize_with = "crate::model::null_as_empty")]
    pub update_playlists: Vec<PlaylistUpdate>,
}

/// Applies change batches with a skip-and-report policy.
///
/// Removals run first, then additions, then updates. An invalid change is
/// recorded as a [`Notice`] and skipped; it never aborts the rest of the
/// batch and nothing is rolled back.
pub struct UpdateEngine<'a> {
    dataset: &'a mut Dataset,
    report: ApplyReport,
}

impl<'a> UpdateEngine<'a> {
    /// Create an engine that mutates `dataset`
    pub fn new(dataset: &'a mut Dataset) -> Self {
        Self {
            dataset,
            report: ApplyReport::default(),
        }
    }

    /// Apply the whole batch and return what happened
    pub fn apply(mut self, batch: ChangeBatch) -> ApplyReport {
        log::debug!(
            "Applying batch: {} removals, {} additions, {} updates",
            batch.remove_playlists.len(),
            batch.new_playlists.len(),
            batch.update_playlists.len()
        );

        for playlist_id in batch.remove_playlists {
            self.remove(playlist_id);
        }

        for playlist in batch.new_playlists {
            self.add(playlist);
        }

        for update in batch.update_playlists {
            self.update(update);
        }

        self.report
    }

    fn remove(&mut self, playlist_id: String) {
        if self.dataset.remove_playlist(&playlist_id).is_some() {
            log::debug!("Removed playlist {}", playlist_id);
            self.report.removed += 1;
        } else {
            self.skip(Notice::PlaylistNotFoundForRemoval { playlist_id });
        }
    }

    fn add(&mut self, mut playlist: Playlist) {
        if self.dataset.has_playlist(&playlist.id) {
            self.skip(Notice::PlaylistAlreadyExists {
                playlist_id: playlist.id,
            });
            return;
        }

        if !self.dataset.has_user(&playlist.user_id) {
            self.skip(Notice::UnknownUser {
                playlist_id: playlist.id,
                user_id: playlist.user_id,
            });
            return;
        }

        // Unknown songs are dropped without a notice
        let dataset = &*self.dataset;
        playlist.song_ids.retain(|song_id| dataset.has_song(song_id));

        if playlist.is_empty() {
            self.skip(Notice::NoExistingSongs {
                playlist_id: playlist.id,
            });
            return;
        }

        log::debug!(
            "Added playlist {} for user {} ({} songs)",
            playlist.id,
            playlist.user_id,
            playlist.len()
        );
        self.dataset.add_playlist(playlist);
        self.report.added += 1;
    }

    fn update(&mut self, update: PlaylistUpdate) {
        let Some(mut playlist) = self.dataset.get_playlist(&update.playlist_id).cloned() else {
            self.skip(Notice::UnknownPlaylist {
                playlist_id: update.playlist_id,
            });
            return;
        };

        let mut appended = 0;
        for song_id in update.song_ids {
            if !self.dataset.has_song(&song_id) {
                self.skip(Notice::UnknownSong {
                    playlist_id: playlist.id.clone(),
                    song_id,
                });
                continue;
            }
            // Songs already in the playlist are appended again
            playlist.add_song(song_id);
            appended += 1;
        }

        log::debug!("Appended {} song(s) to playlist {}", appended, playlist.id);
        self.dataset.add_playlist(playlist);
        self.report.updated += 1;
        self.report.songs_appended += appended;
    }

    fn skip(&mut self, notice: Notice) {
        log::debug!("Skipped: {}", notice);
        self.report.notices.push(notice);
    }
}

/// Apply `batch` to `dataset` in place
pub fn apply_changes(dataset: &mut Dataset, batch: ChangeBatch) -> ApplyReport {
    UpdateEngine::new(dataset).apply(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Song, User};

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn dataset() -> Dataset {
        Dataset::load(
            vec![User::new("u1"), User::new("u2")],
            vec![Song::new("s1"), Song::new("s2"), Song::new("s3")],
            vec![Playlist::new("p1", "u1", ids(&["s1"]))],
        )
    }

    #[test]
    fn test_empty_batch_changes_nothing() {
        let mut data = dataset();
        let report = apply_changes(&mut data, ChangeBatch::default());

        assert!(report.is_clean());
        assert_eq!(report, ApplyReport::default());
        assert_eq!(data.playlist_count(), 1);
    }

    #[test]
    fn test_remove_existing_playlist() {
        let mut data = dataset();
        let batch = ChangeBatch {
            remove_playlists: ids(&["p1"]),
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        assert_eq!(report.removed, 1);
        assert!(!data.has_playlist("p1"));
    }

    #[test]
    fn test_remove_missing_playlist_is_reported() {
        let mut data = dataset();
        let batch = ChangeBatch {
            remove_playlists: ids(&["nope", "p1"]),
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        assert_eq!(
            report.notices,
            vec![Notice::PlaylistNotFoundForRemoval {
                playlist_id: "nope".to_string()
            }]
        );
        assert_eq!(report.removed, 1);
    }

    #[test]
    fn test_add_filters_unknown_songs_in_order() {
        let mut data = dataset();
        let batch = ChangeBatch {
            new_playlists: vec![Playlist::new("p2", "u2", ids(&["s3", "bad", "s1", "worse"]))],
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        // Dropped songs are silent
        assert!(report.is_clean());
        assert_eq!(report.added, 1);
        assert_eq!(data.get_playlist("p2").unwrap().song_ids, ids(&["s3", "s1"]));
    }

    #[test]
    fn test_add_existing_id_does_not_overwrite() {
        let mut data = dataset();
        let batch = ChangeBatch {
            new_playlists: vec![Playlist::new("p1", "u2", ids(&["s2", "s3"]))],
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        assert_eq!(report.added, 0);
        assert_eq!(
            report.notices,
            vec![Notice::PlaylistAlreadyExists {
                playlist_id: "p1".to_string()
            }]
        );
        let p1 = data.get_playlist("p1").unwrap();
        assert_eq!(p1.user_id, "u1");
        assert_eq!(p1.song_ids, ids(&["s1"]));
    }

    #[test]
    fn test_add_duplicate_within_batch_keeps_first() {
        let mut data = dataset();
        let batch = ChangeBatch {
            new_playlists: vec![
                Playlist::new("p2", "u1", ids(&["s2"])),
                Playlist::new("p2", "u2", ids(&["s3"])),
            ],
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        assert_eq!(report.added, 1);
        assert_eq!(report.notices.len(), 1);
        assert_eq!(data.get_playlist("p2").unwrap().song_ids, ids(&["s2"]));
    }

    #[test]
    fn test_add_with_unknown_user_is_rejected() {
        let mut data = dataset();
        let batch = ChangeBatch {
            new_playlists: vec![Playlist::new("p2", "ghost", ids(&["s1"]))],
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        assert!(!data.has_playlist("p2"));
        assert_eq!(
            report.notices,
            vec![Notice::UnknownUser {
                playlist_id: "p2".to_string(),
                user_id: "ghost".to_string()
            }]
        );
    }

    #[test]
    fn test_add_without_existing_songs_is_rejected() {
        let mut data = dataset();
        let batch = ChangeBatch {
            new_playlists: vec![
                Playlist::new("p2", "u1", ids(&["bad"])),
                Playlist::new("p3", "u1", Vec::new()),
            ],
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        assert!(!data.has_playlist("p2"));
        assert!(!data.has_playlist("p3"));
        assert_eq!(report.notices.len(), 2);
        assert!(matches!(report.notices[0], Notice::NoExistingSongs { .. }));
    }

    #[test]
    fn test_removed_id_can_be_added_again() {
        let mut data = dataset();
        let batch = ChangeBatch {
            remove_playlists: ids(&["p1"]),
            new_playlists: vec![Playlist::new("p1", "u2", ids(&["s2"]))],
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        assert!(report.is_clean());
        let p1 = data.get_playlist("p1").unwrap();
        assert_eq!(p1.user_id, "u2");
        assert_eq!(p1.song_ids, ids(&["s2"]));
    }

    #[test]
    fn test_update_appends_valid_songs_with_duplicates() {
        let mut data = dataset();
        let batch = ChangeBatch {
            update_playlists: vec![PlaylistUpdate::new("p1", ids(&["s2", "bad", "s1"]))],
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        assert_eq!(data.get_playlist("p1").unwrap().song_ids, ids(&["s1", "s2", "s1"]));
        assert_eq!(report.updated, 1);
        assert_eq!(report.songs_appended, 2);
        assert_eq!(
            report.notices,
            vec![Notice::UnknownSong {
                playlist_id: "p1".to_string(),
                song_id: "bad".to_string()
            }]
        );
    }

    #[test]
    fn test_update_missing_playlist_is_noop() {
        let mut data = dataset();
        let batch = ChangeBatch {
            update_playlists: vec![PlaylistUpdate::new("p9", ids(&["s1"]))],
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        assert_eq!(report.updated, 0);
        assert!(!data.has_playlist("p9"));
        assert!(matches!(report.notices[0], Notice::UnknownPlaylist { .. }));
    }

    #[test]
    fn test_update_sees_playlist_added_in_same_batch() {
        let mut data = dataset();
        let batch = ChangeBatch {
            new_playlists: vec![Playlist::new("p2", "u1", ids(&["s1"]))],
            update_playlists: vec![PlaylistUpdate::new("p2", ids(&["s3"]))],
            ..Default::default()
        };

        apply_changes(&mut data, batch);

        assert_eq!(data.get_playlist("p2").unwrap().song_ids, ids(&["s1", "s3"]));
    }

    #[test]
    fn test_removal_precedes_update() {
        let mut data = dataset();
        let batch = ChangeBatch {
            remove_playlists: ids(&["p1"]),
            update_playlists: vec![PlaylistUpdate::new("p1", ids(&["s2"]))],
            ..Default::default()
        };

        let report = apply_changes(&mut data, batch);

        assert!(!data.has_playlist("p1"));
        assert_eq!(report.removed, 1);
        assert_eq!(
            report.notices,
            vec![Notice::UnknownPlaylist {
                playlist_id: "p1".to_string()
            }]
        );
    }

    #[test]
    fn test_users_and_songs_are_untouched() {
        let mut data = dataset();
        let batch = ChangeBatch {
            new_playlists: vec![Playlist::new("p2", "u1", ids(&["s1", "s2"]))],
            remove_playlists: ids(&["p1", "p3"]),
            update_playlists: vec![PlaylistUpdate::new("p2", ids(&["s9"]))],
        };

        apply_changes(&mut data, batch);

        assert_eq!(data.user_count(), 2);
        assert_eq!(data.song_count(), 3);
    }
}
