//! In-memory implementation of the EntryRepository port.
//!
//! Backs local development (`database.in_memory`) and the test suite.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::domain::{
    models::{Entry, EntryId, NewEntry},
    ports::outbound::EntryRepository,
    EntryError,
};

#[derive(Default)]
struct Store {
    entries: BTreeMap<EntryId, Entry>,
    last_id: i32,
}

impl Store {
    fn insert(&mut self, entry: &NewEntry, created_at: OffsetDateTime) -> Entry {
        self.last_id += 1;
        let stored = Entry::new(
            self.last_id,
            entry.description.clone(),
            entry.status,
            created_at,
        );
        self.entries.insert(stored.id, stored.clone());
        stored
    }
}

/// Entry repository backed by a `BTreeMap` behind an async lock.
///
/// Ids are handed out from a counter that never goes backwards, also across
/// `replace_all`, mirroring a SERIAL column.
#[derive(Clone, Default)]
pub struct InMemoryEntryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn list(&self) -> Result<Vec<Entry>, EntryError> {
        let store = self.store.read().await;
        Ok(store.entries.values().cloned().collect())
    }

    async fn get(&self, id: &EntryId) -> Result<Option<Entry>, EntryError> {
        let store = self.store.read().await;
        Ok(store.entries.get(id).cloned())
    }

    async fn create(
        &self,
        entry: &NewEntry,
        created_at: OffsetDateTime,
    ) -> Result<Entry, EntryError> {
        let mut store = self.store.write().await;
        Ok(store.insert(entry, created_at))
    }

    async fn update(&self, entry: &Entry) -> Result<Option<Entry>, EntryError> {
        let mut store = self.store.write().await;

        Ok(store.entries.get_mut(&entry.id).map(|stored| {
            stored.description = entry.description.clone();
            stored.status = entry.status;
            stored.clone()
        }))
    }

    async fn delete(&self, id: &EntryId) -> Result<bool, EntryError> {
        let mut store = self.store.write().await;
        Ok(store.entries.remove(id).is_some())
    }

    async fn replace_all(
        &self,
        entries: &[NewEntry],
        created_at: OffsetDateTime,
    ) -> Result<Vec<Entry>, EntryError> {
        let mut store = self.store.write().await;
        store.entries.clear();

        Ok(entries
            .iter()
            .map(|entry| store.insert(entry, created_at))
            .collect())
    }
}
