//! Item Entity
//!
//! One named entry of the remote collection.

use serde::{Deserialize, Deserializer, Serialize};
use super::entity::Entity;

/// A named list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Client-assigned identifier, unique within the collection
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u32,
    /// Display label
    pub name: String,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Item {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Id for a newly created item: one past the largest id present, or 1 for an empty list.
///
/// Ids of deleted items are not tracked, so a freed slot is only reused when
/// it sits above every remaining id. Returns `None` once `u32::MAX` is taken.
pub fn next_id(items: &[Item]) -> Option<u32> {
    items
        .iter()
        .map(|item| item.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
}

/// json-server style services hand ids back as strings ("3"), accept both.
fn deserialize_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u32),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse::<u32>()
            .map_err(|_| serde::de::Error::custom(format!("invalid item id: {:?}", text))),
    }
}
