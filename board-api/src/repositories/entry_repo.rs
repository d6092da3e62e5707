use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait EntryRowRepository {
    async fn get_entries(&self) -> Result<Vec<DatabaseEntry>, RepositoryError>;
    async fn get_entry(&self, id: i32) -> Result<Option<DatabaseEntry>, RepositoryError>;
    async fn create_entry(&self, entry: &NewDatabaseEntry) -> Result<DatabaseEntry, RepositoryError>;
    async fn update_entry(
        &self,
        entry: &UpdateDatabaseEntry,
    ) -> Result<DatabaseEntry, RepositoryError>;
    async fn delete_entry(&self, id: i32) -> Result<u64, RepositoryError>;
    async fn replace_entries(
        &self,
        entries: &[NewDatabaseEntry],
    ) -> Result<Vec<DatabaseEntry>, RepositoryError>;
}

pub struct EntryRepositoryImpl {
    pool: PgPool,
}

impl EntryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DatabaseEntry {
    pub id: i32,
    pub description: String,
    pub status: String,
    pub created_at: time::OffsetDateTime,
}

pub struct NewDatabaseEntry {
    pub description: String,
    pub status: String,
    pub created_at: time::OffsetDateTime,
}

pub struct UpdateDatabaseEntry {
    pub id: i32,
    pub description: String,
    pub status: String,
}

#[async_trait]
impl EntryRowRepository for EntryRepositoryImpl {
    async fn get_entries(&self) -> Result<Vec<DatabaseEntry>, RepositoryError> {
        let entries = sqlx::query_as::<_, DatabaseEntry>(
            r#"
            SELECT id, description, status, created_at
            FROM entries
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn get_entry(&self, id: i32) -> Result<Option<DatabaseEntry>, RepositoryError> {
        let entry = sqlx::query_as::<_, DatabaseEntry>(
            r#"
            SELECT id, description, status, created_at
            FROM entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn create_entry(
        &self,
        entry: &NewDatabaseEntry,
    ) -> Result<DatabaseEntry, RepositoryError> {
        let created = sqlx::query_as::<_, DatabaseEntry>(
            r#"
            INSERT INTO entries (description, status, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, description, status, created_at
            "#,
        )
        .bind(&entry.description)
        .bind(&entry.status)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_entry(
        &self,
        entry: &UpdateDatabaseEntry,
    ) -> Result<DatabaseEntry, RepositoryError> {
        let updated = sqlx::query_as::<_, DatabaseEntry>(
            r#"
            UPDATE entries
            SET description = $1, status = $2
            WHERE id = $3
            RETURNING id, description, status, created_at
            "#,
        )
        .bind(&entry.description)
        .bind(&entry.status)
        .bind(entry.id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| RepositoryError::NotFound(entry.id.to_string()))
    }

    async fn delete_entry(&self, id: i32) -> Result<u64, RepositoryError> {
        let query_result = sqlx::query(
            r#"
            DELETE FROM entries WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(query_result.rows_affected())
    }

    async fn replace_entries(
        &self,
        entries: &[NewDatabaseEntry],
    ) -> Result<Vec<DatabaseEntry>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM entries").execute(&mut *tx).await?;

        let mut inserted = Vec::with_capacity(entries.len());
        for entry in entries {
            let row = sqlx::query_as::<_, DatabaseEntry>(
                r#"
                INSERT INTO entries (description, status, created_at)
                VALUES ($1, $2, $3)
                RETURNING id, description, status, created_at
                "#,
            )
            .bind(&entry.description)
            .bind(&entry.status)
            .bind(entry.created_at)
            .fetch_one(&mut *tx)
            .await?;
            inserted.push(row);
        }

        tx.commit().await?;

        Ok(inserted)
    }
}
