//! Axum server setup
//!
//! Server skeleton with:
//! - Bearer-token auth on every API route (health stays public)
//! - Localhost-only CORS by default
//! - Tracing middleware and panic recovery
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::require_bearer_token;
use super::error::ApiError;
use super::routes;
use crate::db::NotefulStore;

/// Path the notes and folders API is mounted under
pub const DEFAULT_BASE_PATH: &str = "/api/noteful";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,

    /// Bearer token required on API routes; `None` disables the check
    pub api_token: Option<String>,

    /// Mount point for the API routes, also used for `Location` headers
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors_permissive: false,
            api_token: None,
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl ServerConfig {
    /// Base path with a leading `/` and no trailing `/`. The root mount is
    /// the empty string.
    pub fn normalized_base_path(&self) -> String {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn NotefulStore>,
    pub api_token: Option<String>,
    pub base_path: String,
}

impl AppState {
    /// Canonical path of a note, used for `Location` headers.
    pub fn note_location(&self, id: i32) -> String {
        format!("{}/{}", self.base_path.trim_end_matches('/'), id)
    }

    pub fn folder_location(&self, id: i32) -> String {
        format!("{}/folder/{}", self.base_path.trim_end_matches('/'), id)
    }
}

/// Build the application router around a store.
pub fn build_router(store: Arc<dyn NotefulStore>, config: &ServerConfig) -> Router {
    let base_path = config.normalized_base_path();
    let state = Arc::new(AppState {
        store,
        api_token: config.api_token.clone(),
        base_path: base_path.clone(),
    });

    let cors_layer = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        // Localhost only
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://localhost:8000"),
                HeaderValue::from_static("http://127.0.0.1:3000"),
                HeaderValue::from_static("http://127.0.0.1:8000"),
            ])
            .allow_methods(cors::Any)
            .allow_headers(cors::Any)
    };

    let api = routes::notes::router(state.clone()).merge(routes::folders::router(state.clone()));

    // axum refuses to nest at "/"; mounted at the root, the notes list owns "/"
    let mounted = if base_path.is_empty() {
        api
    } else {
        routes::health::root_router().nest(&base_path, api)
    };

    let protected = mounted
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_token,
        ));

    Router::new()
        .merge(protected)
        .merge(routes::health::router())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turn a handler panic into the generic 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal {
        message: format!("handler panicked: {}", message),
    }
    .into_response()
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let store = Arc::new(PgStore::new(pool));
/// run_server(store, ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    store: Arc<dyn NotefulStore>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    if config.api_token.is_none() {
        tracing::warn!("No API token configured - bearer auth disabled");
    }

    let app = build_router(store, &config);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        base_path = %config.base_path,
        "Server listening on {}",
        config.bind_addr
    );

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
