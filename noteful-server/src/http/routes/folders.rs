//! Folder endpoints

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
use crate::models::{Folder, FolderBody};

const RESOURCE: &str = "Folder";

/// Existence gate for `/folder/{folder_id}`
async fn load_folder(
    State(state): State<Arc<AppState>>,
    Path(folder_id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let id = parse_id(&folder_id).ok_or(ApiError::NotFound { resource: RESOURCE })?;
    let folder = state
        .store
        .get_folder(id)
        .await?
        .ok_or(ApiError::NotFound { resource: RESOURCE })?;

    request.extensions_mut().insert(folder);
    Ok(next.run(request).await)
}

/// GET /folders
async fn list_folders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Folder>>, ApiError> {
    Ok(Json(state.store.list_folders().await?))
}

/// POST /folders
async fn create_folder(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<FolderBody>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Folder>), ApiError> {
    let folder = state.store.insert_folder(body.into_new()?).await?;
    tracing::info!(folder_id = folder.id, "Folder created");

    let location = state.folder_location(folder.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(folder)))
}

/// GET /folder/{folder_id}
async fn get_folder(Extension(folder): Extension<Folder>) -> Json<Folder> {
    Json(folder.sanitized())
}

/// PATCH /folder/{folder_id}
async fn update_folder(
    State(state): State<Arc<AppState>>,
    Extension(folder): Extension<Folder>,
    JsonBody(body): JsonBody<FolderBody>,
) -> Result<StatusCode, ApiError> {
    let rows = state
        .store
        .update_folder(folder.id, body.into_patch()?)
        .await?;
    tracing::info!(folder_id = folder.id, rows, "Folder updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /folder/{folder_id} - notes in the folder are kept, unfiled
async fn delete_folder(
    State(state): State<Arc<AppState>>,
    Extension(folder): Extension<Folder>,
) -> Result<StatusCode, ApiError> {
    let rows = state.store.delete_folder(folder.id).await?;
    tracing::info!(folder_id = folder.id, rows, "Folder deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Folder routes, relative to the API base path
pub fn router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let item = Router::new()
        .route(
            "/folder/{folder_id}",
            get(get_folder).patch(update_folder).delete(delete_folder),
        )
        .route_layer(middleware::from_fn_with_state(state, load_folder));

    Router::new()
        .route("/folders", get(list_folders).post(create_folder))
        .merge(item)
}
