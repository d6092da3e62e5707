//! PostgreSQL implementation of the EntryRepository port.

use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{Entry, EntryId, EntryStatus, NewEntry},
    ports::outbound::EntryRepository,
    EntryError,
};
use crate::repositories::{
    DatabaseEntry, EntryRepositoryImpl, EntryRowRepository, NewDatabaseEntry, RepositoryError,
    UpdateDatabaseEntry,
};

/// Adapter that implements EntryRepository on top of the row repository.
pub struct PostgresEntryAdapter<R = EntryRepositoryImpl> {
    repo: Arc<R>,
}

impl<R> PostgresEntryAdapter<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: EntryRowRepository + Send + Sync + 'static> EntryRepository for PostgresEntryAdapter<R> {
    async fn list(&self) -> Result<Vec<Entry>, EntryError> {
        self.repo
            .get_entries()
            .await
            .map_err(storage_error)?
            .into_iter()
            .map(db_entry_to_entry)
            .collect()
    }

    async fn get(&self, id: &EntryId) -> Result<Option<Entry>, EntryError> {
        self.repo
            .get_entry(id.as_i32())
            .await
            .map_err(storage_error)?
            .map(db_entry_to_entry)
            .transpose()
    }

    async fn create(
        &self,
        entry: &NewEntry,
        created_at: OffsetDateTime,
    ) -> Result<Entry, EntryError> {
        let row = self
            .repo
            .create_entry(&new_db_entry(entry, created_at))
            .await
            .map_err(storage_error)?;

        db_entry_to_entry(row)
    }

    async fn update(&self, entry: &Entry) -> Result<Option<Entry>, EntryError> {
        let update = UpdateDatabaseEntry {
            id: entry.id.as_i32(),
            description: entry.description.clone(),
            status: entry.status.to_string(),
        };

        match self.repo.update_entry(&update).await {
            Ok(row) => db_entry_to_entry(row).map(Some),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(storage_error(e)),
        }
    }

    async fn delete(&self, id: &EntryId) -> Result<bool, EntryError> {
        let deleted = self
            .repo
            .delete_entry(id.as_i32())
            .await
            .map_err(storage_error)?;

        Ok(deleted > 0)
    }

    async fn replace_all(
        &self,
        entries: &[NewEntry],
        created_at: OffsetDateTime,
    ) -> Result<Vec<Entry>, EntryError> {
        let rows: Vec<_> = entries
            .iter()
            .map(|entry| new_db_entry(entry, created_at))
            .collect();

        self.repo
            .replace_entries(&rows)
            .await
            .map_err(storage_error)?
            .into_iter()
            .map(db_entry_to_entry)
            .collect()
    }
}

fn storage_error(err: RepositoryError) -> EntryError {
    EntryError::storage(err.to_string())
}

fn new_db_entry(entry: &NewEntry, created_at: OffsetDateTime) -> NewDatabaseEntry {
    NewDatabaseEntry {
        description: entry.description.clone(),
        status: entry.status.to_string(),
        created_at,
    }
}

fn db_entry_to_entry(row: DatabaseEntry) -> Result<Entry, EntryError> {
    let status = row.status.parse::<EntryStatus>().map_err(|_| {
        EntryError::storage(format!(
            "entry {} has unknown status '{}'",
            row.id, row.status
        ))
    })?;

    Ok(Entry::new(row.id, row.description, status, row.created_at))
}
