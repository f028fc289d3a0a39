//! Note records and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::sanitize::escape_markup;
use super::validation::{require_text, supplied_text, ValidationError};

/// Fields a PATCH may change, in the order they are reported.
pub const NOTE_UPDATABLE_FIELDS: &[&str] = &["title", "content", "folder_id"];

/// Note record from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Note {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub folder_id: Option<i32>,
    pub date_published: DateTime<Utc>,
}

impl Note {
    /// Copy of the note with its free-text fields escaped for output.
    pub fn sanitized(&self) -> Self {
        Self {
            id: self.id,
            title: escape_markup(&self.title),
            content: escape_markup(&self.content),
            folder_id: self.folder_id,
            date_published: self.date_published,
        }
    }
}

/// Raw JSON body for note create/update; every field is optional here and
/// checked by `into_new` / `into_patch`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NoteBody {
    pub title: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<i32>,
}

impl NoteBody {
    /// Validate a create request. Fields are checked in declaration order so
    /// the first missing one is the one reported.
    pub fn into_new(self) -> Result<NewNote, ValidationError> {
        let title = require_text(self.title, "title")?;
        let content = require_text(self.content, "content")?;
        let folder_id = self
            .folder_id
            .ok_or(ValidationError::MissingField { field: "folder_id" })?;

        Ok(NewNote {
            title,
            content,
            folder_id: Some(folder_id),
        })
    }

    /// Validate a partial update; at least one field must be supplied.
    pub fn into_patch(self) -> Result<NotePatch, ValidationError> {
        let patch = NotePatch {
            title: supplied_text(self.title),
            content: supplied_text(self.content),
            folder_id: self.folder_id,
        };

        if patch.is_empty() {
            return Err(ValidationError::NoUpdateFields {
                accepted: NOTE_UPDATABLE_FIELDS,
            });
        }
        Ok(patch)
    }
}

/// Validated note insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub folder_id: Option<i32>,
}

/// Partial note update; `None` leaves the stored value alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<i32>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.folder_id.is_none()
    }

    /// Apply the supplied fields to an existing note.
    pub fn apply(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(folder_id) = self.folder_id {
            note.folder_id = Some(folder_id);
        }
    }
}
