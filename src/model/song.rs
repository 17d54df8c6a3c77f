use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A song that playlists can reference by ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique identifier
    pub id: String,

    /// Artist, title and any other metadata
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Song {
    /// Create a song with no metadata
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: Map::new(),
        }
    }

    /// Set a metadata field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
