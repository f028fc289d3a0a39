//! Static bearer-token gate

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::error::ApiError;
use super::server::AppState;

/// Reject requests whose `Authorization: Bearer <token>` does not match the
/// configured API token. With no token configured every request passes.
pub async fn require_bearer_token(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.api_token.as_deref() else {
        return Ok(next.run(request).await);
    };

    let supplied = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    if supplied != Some(expected) {
        tracing::warn!(path = %request.uri().path(), "Unauthorized request");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
