//! Domain models for notes and folders
//!
//! Records come back from the store as `Note` / `Folder`. Request bodies are
//! turned into `NewNote` / `NotePatch` (and the folder equivalents) only after
//! the required-field checks in `validation` pass.

pub mod folder;
pub mod note;
pub mod sanitize;
pub mod validation;

pub use folder::{Folder, FolderBody, FolderPatch, NewFolder, FOLDER_UPDATABLE_FIELDS};
pub use note::{NewNote, Note, NoteBody, NotePatch, NOTE_UPDATABLE_FIELDS};
pub use sanitize::escape_markup;
pub use validation::ValidationError;
