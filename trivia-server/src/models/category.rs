//! Question categories

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use sqlx::FromRow;

/// Category record. Read-only over the API.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize, serde::Serialize)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories rendered as a `{"<id>": "<type>"}` JSON object.
///
/// Entries are written in the order given, so a list already sorted by type
/// stays sorted in the response body.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap(pub Vec<Category>);

impl CategoryMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Category>> for CategoryMap {
    fn from(categories: Vec<Category>) -> Self {
        Self(categories)
    }
}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.id.to_string(), &category.kind)?;
        }
        map.end()
    }
}
