//! Store seam between the HTTP layer and persistence
//!
//! Handlers only see `dyn NotefulStore`, so the router can be driven by the
//! PostgreSQL store in production and by `MemoryStore` in tests.

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{DbError, FolderRepo, NoteRepo};
use crate::models::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};

/// One method per logical operation on notes and folders
#[async_trait]
pub trait NotefulStore: Send + Sync + 'static {
    async fn list_notes(&self) -> Result<Vec<Note>, DbError>;
    async fn get_note(&self, id: i32) -> Result<Option<Note>, DbError>;
    async fn insert_note(&self, new: NewNote) -> Result<Note, DbError>;
    /// Returns the number of affected rows.
    async fn update_note(&self, id: i32, patch: NotePatch) -> Result<u64, DbError>;
    async fn delete_note(&self, id: i32) -> Result<u64, DbError>;

    async fn list_folders(&self) -> Result<Vec<Folder>, DbError>;
    async fn get_folder(&self, id: i32) -> Result<Option<Folder>, DbError>;
    async fn insert_folder(&self, new: NewFolder) -> Result<Folder, DbError>;
    async fn update_folder(&self, id: i32, patch: FolderPatch) -> Result<u64, DbError>;
    async fn delete_folder(&self, id: i32) -> Result<u64, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotefulStore for PgStore {
    async fn list_notes(&self) -> Result<Vec<Note>, DbError> {
        NoteRepo::new(&self.pool).list().await
    }

    async fn get_note(&self, id: i32) -> Result<Option<Note>, DbError> {
        NoteRepo::new(&self.pool).get(id).await
    }

    async fn insert_note(&self, new: NewNote) -> Result<Note, DbError> {
        NoteRepo::new(&self.pool).insert(&new).await
    }

    async fn update_note(&self, id: i32, patch: NotePatch) -> Result<u64, DbError> {
        NoteRepo::new(&self.pool).update(id, &patch).await
    }

    async fn delete_note(&self, id: i32) -> Result<u64, DbError> {
        NoteRepo::new(&self.pool).delete(id).await
    }

    async fn list_folders(&self) -> Result<Vec<Folder>, DbError> {
        FolderRepo::new(&self.pool).list().await
    }

    async fn get_folder(&self, id: i32) -> Result<Option<Folder>, DbError> {
        FolderRepo::new(&self.pool).get(id).await
    }

    async fn insert_folder(&self, new: NewFolder) -> Result<Folder, DbError> {
        FolderRepo::new(&self.pool).insert(&new).await
    }

    async fn update_folder(&self, id: i32, patch: FolderPatch) -> Result<u64, DbError> {
        FolderRepo::new(&self.pool).update(id, &patch).await
    }

    async fn delete_folder(&self, id: i32) -> Result<u64, DbError> {
        FolderRepo::new(&self.pool).delete(id).await
    }
}
