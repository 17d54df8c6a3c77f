use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user who can own playlists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: String,

    /// Profile fields (name, etc.), carried through untouched
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    /// Create a user with no profile fields
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile: Map::new(),
        }
    }

    /// Set a profile field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }
}
