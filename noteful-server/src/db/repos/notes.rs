//! Note repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewNote, Note, NotePatch};

/// Note repository
pub struct NoteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> NoteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All notes in insertion order.
    pub async fn list(&self) -> Result<Vec<Note>, DbError> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, folder_id, date_published
            FROM notes
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(notes)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Note>, DbError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, folder_id, date_published
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(note)
    }

    /// Insert a note; the database assigns `id` and `date_published`.
    pub async fn insert(&self, new: &NewNote) -> Result<Note, DbError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (title, content, folder_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, folder_id, date_published
            "#,
        )
        .bind(&new.title)
        .bind(&new.content)
        .bind(new.folder_id)
        .fetch_one(self.pool)
        .await?;

        Ok(note)
    }

    /// Update only the supplied fields. Returns the number of rows touched.
    pub async fn update(&self, id: i32, patch: &NotePatch) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE notes
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                folder_id = COALESCE($4, folder_id)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.content.as_deref())
        .bind(patch.folder_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
