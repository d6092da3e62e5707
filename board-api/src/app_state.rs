use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    adapters::outbound::{memory::InMemoryEntryRepository, postgres::PostgresEntryAdapter},
    domain::{ports::inbound::EntryService, services::EntryServiceImpl},
    repositories::EntryRepositoryImpl,
};

#[derive(Clone)]
pub struct AppState {
    pub entry_service: Arc<dyn EntryService>,
}

impl AppState {
    pub fn new(entry_service: Arc<dyn EntryService>) -> Self {
        Self { entry_service }
    }

    /// State backed by Postgres.
    pub fn with_postgres(db_pool: PgPool) -> Self {
        let rows = Arc::new(EntryRepositoryImpl::new(db_pool));
        let repo = Arc::new(PostgresEntryAdapter::new(rows));
        Self::new(Arc::new(EntryServiceImpl::new(repo)))
    }

    /// State backed by process memory. Entries are lost on restart.
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryEntryRepository::new());
        Self::new(Arc::new(EntryServiceImpl::new(repo)))
    }
}
