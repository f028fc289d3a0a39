//! HTTP server layer
//!
//! Axum server with:
//! - Static bearer-token auth
//! - CORS (localhost only by default)
//! - Request tracing and panic recovery
//! - Graceful shutdown
//! - JSON error responses

pub mod auth;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
