//! HTTP response types for the entries API.
//!
//! These types serialize to the JSON format expected by the board script.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::models::{Entry, EntryStatus};

/// A single board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: i32,
    pub description: String,
    pub status: EntryStatus,
    /// When the entry was created (ISO 8601).
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.as_i32(),
            description: entry.description,
            status: entry.status,
            created_at: entry.created_at,
        }
    }
}

/// Response for the seed endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub message: String,
    pub entries: Vec<EntryResponse>,
}
