//! In-process store for tests
//!
//! Mirrors the PostgreSQL behavior the router depends on: sequential ids
//! starting at 1, `id` ordering on list, and `folder_id` cleared on notes
//! when their folder is deleted.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::repos::DbError;
use super::store::NotefulStore;
use crate::models::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};

#[derive(Default)]
struct Tables {
    notes: BTreeMap<i32, Note>,
    folders: BTreeMap<i32, Folder>,
    next_note_id: i32,
    next_folder_id: i32,
}

/// Store backed by ordered maps behind a `RwLock`
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotefulStore for MemoryStore {
    async fn list_notes(&self) -> Result<Vec<Note>, DbError> {
        Ok(self.tables.read().await.notes.values().cloned().collect())
    }

    async fn get_note(&self, id: i32) -> Result<Option<Note>, DbError> {
        Ok(self.tables.read().await.notes.get(&id).cloned())
    }

    async fn insert_note(&self, new: NewNote) -> Result<Note, DbError> {
        let mut tables = self.tables.write().await;
        tables.next_note_id += 1;
        let note = Note {
            id: tables.next_note_id,
            title: new.title,
            content: new.content,
            folder_id: new.folder_id,
            date_published: Utc::now(),
        };
        tables.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: i32, patch: NotePatch) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        match tables.notes.get_mut(&id) {
            Some(note) => {
                patch.apply(note);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_note(&self, id: i32) -> Result<u64, DbError> {
        let removed = self.tables.write().await.notes.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn list_folders(&self) -> Result<Vec<Folder>, DbError> {
        Ok(self.tables.read().await.folders.values().cloned().collect())
    }

    async fn get_folder(&self, id: i32) -> Result<Option<Folder>, DbError> {
        Ok(self.tables.read().await.folders.get(&id).cloned())
    }

    async fn insert_folder(&self, new: NewFolder) -> Result<Folder, DbError> {
        let mut tables = self.tables.write().await;
        tables.next_folder_id += 1;
        let folder = Folder {
            id: tables.next_folder_id,
            folder_name: new.folder_name,
        };
        tables.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn update_folder(&self, id: i32, patch: FolderPatch) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        match tables.folders.get_mut(&id) {
            Some(folder) => {
                patch.apply(folder);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_folder(&self, id: i32) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        if tables.folders.remove(&id).is_none() {
            return Ok(0);
        }
        for note in tables.notes.values_mut() {
            if note.folder_id == Some(id) {
                note.folder_id = None;
            }
        }
        Ok(1)
    }
}
