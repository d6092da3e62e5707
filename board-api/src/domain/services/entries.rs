use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{is_blank, Entry, EntryId, EntryStatus, EntryUpdate, NewEntry},
    ports::{inbound::EntryService, outbound::EntryRepository},
    EntryError,
};

/// Implementation of the EntryService inbound port.
///
/// Owns the validation rules (no blank descriptions, merge semantics for
/// partial updates) and delegates storage to an EntryRepository.
pub struct EntryServiceImpl<R> {
    repo: Arc<R>,
}

impl<R> EntryServiceImpl<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: EntryRepository> EntryService for EntryServiceImpl<R> {
    async fn list_entries(&self) -> Result<Vec<Entry>, EntryError> {
        let mut entries = self.repo.list().await?;
        entries.sort_by_key(|e| (e.created_at, e.id));
        Ok(entries)
    }

    async fn get_entry(&self, id: &EntryId) -> Result<Option<Entry>, EntryError> {
        self.repo.get(id).await
    }

    async fn create_entry(&self, description: String) -> Result<Entry, EntryError> {
        if is_blank(&description) {
            return Err(EntryError::EmptyDescription);
        }

        let entry = self
            .repo
            .create(&NewEntry::new(description), OffsetDateTime::now_utc())
            .await?;
        tracing::debug!(id = %entry.id, "created entry");

        Ok(entry)
    }

    async fn update_entry(
        &self,
        id: &EntryId,
        update: EntryUpdate,
    ) -> Result<Entry, EntryError> {
        let current = self.repo.get(id).await?.ok_or(EntryError::NotFound(*id))?;

        let merged = current.merged(update);
        if is_blank(&merged.description) {
            return Err(EntryError::EmptyDescription);
        }
        if merged == current {
            return Ok(current);
        }

        let saved = self
            .repo
            .update(&merged)
            .await?
            .ok_or(EntryError::NotFound(*id))?;
        tracing::debug!(id = %saved.id, status = %saved.status, "updated entry");

        Ok(saved)
    }

    async fn move_entry(&self, id: &EntryId, status: EntryStatus) -> Result<Entry, EntryError> {
        self.update_entry(id, EntryUpdate::status(status)).await
    }

    async fn delete_entry(&self, id: &EntryId) -> Result<Entry, EntryError> {
        let entry = self.repo.get(id).await?.ok_or(EntryError::NotFound(*id))?;

        if !self.repo.delete(id).await? {
            return Err(EntryError::NotFound(*id));
        }
        tracing::debug!(id = %entry.id, "deleted entry");

        Ok(entry)
    }

    async fn seed(&self, entries: Vec<NewEntry>) -> Result<Vec<Entry>, EntryError> {
        if entries.iter().any(|e| is_blank(&e.description)) {
            return Err(EntryError::EmptyDescription);
        }

        let seeded = self
            .repo
            .replace_all(&entries, OffsetDateTime::now_utc())
            .await?;
        tracing::info!(count = seeded.len(), "seeded board");

        Ok(seeded)
    }
}
