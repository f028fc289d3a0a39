//! Folder records and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::sanitize::escape_markup;
use super::validation::{require_text, supplied_text, ValidationError};

pub const FOLDER_UPDATABLE_FIELDS: &[&str] = &["folder_name"];

/// Folder record from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Folder {
    pub id: i32,
    pub folder_name: String,
}

impl Folder {
    pub fn sanitized(&self) -> Self {
        Self {
            id: self.id,
            folder_name: escape_markup(&self.folder_name),
        }
    }
}

/// Raw JSON body for folder create/update
#[derive(Debug, Default, Deserialize)]
pub struct FolderBody {
    pub folder_name: Option<String>,
}

impl FolderBody {
    pub fn into_new(self) -> Result<NewFolder, ValidationError> {
        Ok(NewFolder {
            folder_name: require_text(self.folder_name, "folder_name")?,
        })
    }

    pub fn into_patch(self) -> Result<FolderPatch, ValidationError> {
        let folder_name = supplied_text(self.folder_name).ok_or(ValidationError::NoUpdateFields {
            accepted: FOLDER_UPDATABLE_FIELDS,
        })?;
        Ok(FolderPatch {
            folder_name: Some(folder_name),
        })
    }
}

/// Validated folder insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFolder {
    pub folder_name: String,
}

/// Partial folder update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderPatch {
    pub folder_name: Option<String>,
}

impl FolderPatch {
    pub fn apply(&self, folder: &mut Folder) {
        if let Some(name) = &self.folder_name {
            folder.folder_name = name.clone();
        }
    }
}
