use thiserror::Error;

/// Errors from the SQL row layer, converted to domain errors by the adapter.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Row not found: {0}")]
    NotFound(String),
}
