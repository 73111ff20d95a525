use serde::{Deserialize, Serialize};

/// Server-assigned row identifier.
pub type CreatorId = i64;

/// A persisted creator row, as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorRecord {
    pub id: CreatorId,
    pub name: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
}

impl CreatorRecord {
    /// The user-supplied part of the record.
    pub fn fields(&self) -> CreatorFields {
        CreatorFields {
            name: self.name.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Write payload: every column except `id`.
///
/// `imageURL` is always serialized, as `null` when absent, so an update
/// overwrites the full field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorFields {
    pub name: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
}
