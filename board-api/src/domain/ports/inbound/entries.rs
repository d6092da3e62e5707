use async_trait::async_trait;

use crate::domain::{
    models::{Entry, EntryId, EntryStatus, EntryUpdate, NewEntry},
    EntryError,
};

/// Inbound port for board operations.
///
/// Both the HTML pages and the JSON API go through this trait.
#[async_trait]
pub trait EntryService: Send + Sync + 'static {
    /// Every entry on the board, oldest first.
    async fn list_entries(&self) -> Result<Vec<Entry>, EntryError>;

    /// Look up a single entry. A missing entry is `Ok(None)`.
    async fn get_entry(&self, id: &EntryId) -> Result<Option<Entry>, EntryError>;

    /// Create a pending entry. Blank descriptions are rejected.
    async fn create_entry(&self, description: String) -> Result<Entry, EntryError>;

    /// Merge `update` into the stored entry and persist it.
    async fn update_entry(&self, id: &EntryId, update: EntryUpdate)
        -> Result<Entry, EntryError>;

    /// Drop an entry onto another board column.
    async fn move_entry(&self, id: &EntryId, status: EntryStatus) -> Result<Entry, EntryError>;

    /// Remove an entry, returning what was deleted.
    async fn delete_entry(&self, id: &EntryId) -> Result<Entry, EntryError>;

    /// Replace the whole board with `entries`.
    async fn seed(&self, entries: Vec<NewEntry>) -> Result<Vec<Entry>, EntryError>;
}
