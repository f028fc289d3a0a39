//! Folder repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{Folder, FolderPatch, NewFolder};

/// Folder repository
pub struct FolderRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> FolderRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Folder>, DbError> {
        let folders =
            sqlx::query_as::<_, Folder>("SELECT id, folder_name FROM folders ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(folders)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Folder>, DbError> {
        let folder = sqlx::query_as::<_, Folder>("SELECT id, folder_name FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(folder)
    }

    pub async fn insert(&self, new: &NewFolder) -> Result<Folder, DbError> {
        let folder = sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (folder_name) VALUES ($1) RETURNING id, folder_name",
        )
        .bind(&new.folder_name)
        .fetch_one(self.pool)
        .await?;

        Ok(folder)
    }

    pub async fn update(&self, id: i32, patch: &FolderPatch) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE folders SET folder_name = COALESCE($2, folder_name) WHERE id = $1",
        )
        .bind(id)
        .bind(patch.folder_name.as_deref())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a folder. Notes that referenced it keep existing with a null
    /// `folder_id` (enforced by the foreign key).
    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
