//! Entity model for mixtape snapshots
//!
//! Users and songs are fixed once loaded; playlists are the only records
//! a change batch can create, modify or remove.

mod dataset;
mod playlist;
mod song;
mod user;

pub use dataset::Dataset;
pub use playlist::{Playlist, PlaylistUpdate};
pub use song::Song;
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Decode a list field, treating `null` the same as a missing key
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
