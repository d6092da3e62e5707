//! Entry repository port (outbound).
//!
//! Defines the interface for persisting board entries.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{Entry, EntryId, NewEntry},
    EntryError,
};

/// Outbound port for entry storage.
#[async_trait]
pub trait EntryRepository: Send + Sync + 'static {
    /// All stored entries, oldest first.
    async fn list(&self) -> Result<Vec<Entry>, EntryError>;

    async fn get(&self, id: &EntryId) -> Result<Option<Entry>, EntryError>;

    async fn create(
        &self,
        entry: &NewEntry,
        created_at: OffsetDateTime,
    ) -> Result<Entry, EntryError>;

    /// Persist description and status of an existing entry.
    ///
    /// Returns `None` when the entry no longer exists.
    async fn update(&self, entry: &Entry) -> Result<Option<Entry>, EntryError>;

    /// Returns whether an entry was removed.
    async fn delete(&self, id: &EntryId) -> Result<bool, EntryError>;

    /// Drop every entry and insert `entries` in order.
    async fn replace_all(
        &self,
        entries: &[NewEntry],
        created_at: OffsetDateTime,
    ) -> Result<Vec<Entry>, EntryError>;
}
