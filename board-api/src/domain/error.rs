use thiserror::Error;

use super::models::EntryId;

/// Errors that can occur during entry operations.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("entry not found: {0}")]
    NotFound(EntryId),
    #[error("invalid entry id: {0}")]
    InvalidId(String),
    #[error("invalid status: {0}")]
    InvalidStatus(String),
    #[error("description cannot be empty")]
    EmptyDescription,
    #[error("{0}")]
    Storage(String),
}

impl EntryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
