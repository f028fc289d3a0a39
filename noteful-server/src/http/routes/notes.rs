//! Note endpoints
//!
//! `/` lists and creates notes. `/{note_id}` is guarded by `load_note`, which
//! answers 404 for unknown ids and otherwise hands the record to the verb
//! handler through request extensions.

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Extension, Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{parse_id, JsonBody};
use crate::http::server::AppState;
use crate::models::{Note, NoteBody};

const RESOURCE: &str = "Note";

/// Existence gate for `/{note_id}`
async fn load_note(
    State(state): State<Arc<AppState>>,
    Path(note_id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let id = parse_id(&note_id).ok_or(ApiError::NotFound { resource: RESOURCE })?;
    let note = state
        .store
        .get_note(id)
        .await?
        .ok_or(ApiError::NotFound { resource: RESOURCE })?;

    request.extensions_mut().insert(note);
    Ok(next.run(request).await)
}

/// Reject references to folders that are not stored.
async fn ensure_folder_exists(
    state: &AppState,
    folder_id: Option<i32>,
) -> Result<(), ApiError> {
    let Some(id) = folder_id else {
        return Ok(());
    };

    match state.store.get_folder(id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::UnknownFolder { id }),
    }
}

/// GET / - list all notes
async fn list_notes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.store.list_notes().await?;
    Ok(Json(notes))
}

/// POST / - create a note
async fn create_note(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<NoteBody>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Note>), ApiError> {
    let new = body.into_new()?;
    ensure_folder_exists(&state, new.folder_id).await?;

    let note = state.store.insert_note(new).await?;
    tracing::info!(note_id = note.id, folder_id = ?note.folder_id, "Note created");

    let location = state.note_location(note.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(note)))
}

/// GET /{note_id} - fetch one note with escaped text
async fn get_note(Extension(note): Extension<Note>) -> Json<Note> {
    Json(note.sanitized())
}

/// PATCH /{note_id} - update supplied fields
async fn update_note(
    State(state): State<Arc<AppState>>,
    Extension(note): Extension<Note>,
    JsonBody(body): JsonBody<NoteBody>,
) -> Result<StatusCode, ApiError> {
    let patch = body.into_patch()?;
    ensure_folder_exists(&state, patch.folder_id).await?;

    let rows = state.store.update_note(note.id, patch).await?;
    tracing::info!(note_id = note.id, rows, "Note updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /{note_id}
async fn delete_note(
    State(state): State<Arc<AppState>>,
    Extension(note): Extension<Note>,
) -> Result<StatusCode, ApiError> {
    let rows = state.store.delete_note(note.id).await?;
    tracing::info!(note_id = note.id, rows, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Note routes, relative to the API base path
pub fn router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let item = Router::new()
        .route(
            "/{note_id}",
            get(get_note).patch(update_note).delete(delete_note),
        )
        .route_layer(middleware::from_fn_with_state(state, load_note));

    Router::new()
        .route("/", get(list_notes).post(create_note))
        .merge(item)
}
