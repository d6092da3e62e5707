mod entry_repo;
mod repo_error;

pub use entry_repo::*;
pub use repo_error::RepositoryError;
