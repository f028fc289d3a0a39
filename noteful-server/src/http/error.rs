//! API error types with IntoResponse
//!
//! Client errors carry a `{"error": {"message": ...}}` body naming what went
//! wrong. Anything unexpected is logged and answered with a generic 500 that
//! leaks no internal detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// Message returned for every 500
pub const GENERIC_SERVER_ERROR: &str = "server error";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or empty request fields (400)
    Validation(ValidationError),

    /// Resource not found (404); `resource` is the display name, e.g. "Note"
    NotFound { resource: &'static str },

    /// A note referenced a folder that does not exist (400)
    UnknownFolder { id: i32 },

    /// Malformed request body (400)
    BadRequest { message: String },

    /// Missing or wrong bearer token (401)
    Unauthorized,

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

fn message_body(message: impl Into<String>) -> Value {
    json!({ "error": { "message": message.into() } })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, message_body(e.to_string())),
            Self::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                message_body(format!("{} doesn't exist", resource)),
            ),
            Self::UnknownFolder { id } => (
                StatusCode::BAD_REQUEST,
                message_body(format!("Folder '{}' doesn't exist", id)),
            ),
            Self::BadRequest { message } => (StatusCode::BAD_REQUEST, message_body(message)),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Unauthorized request" }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message_body(GENERIC_SERVER_ERROR),
                )
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message_body(GENERIC_SERVER_ERROR),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::MissingField { field: "title" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": { "message": "Missing 'title' in request body" } })
        );
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound { resource: "Note" }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": { "message": "Note doesn't exist" } })
        );
    }

    #[tokio::test]
    async fn unauthorized_is_401() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn database_error_hides_detail() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": { "message": "server error" } })
        );
    }
}
