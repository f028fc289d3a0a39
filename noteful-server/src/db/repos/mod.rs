//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps one logical operation onto one
//! SQL statement. No validation happens here; constraint violations surface
//! as `DbError::Sqlx`.

pub mod folders;
pub mod notes;

pub use folders::FolderRepo;
pub use notes::NoteRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
