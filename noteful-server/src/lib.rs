//! noteful-server: HTTP API for notes and folders
//!
//! Notes and folders live in PostgreSQL and are exposed as REST resources
//! under `/api/noteful`, gated by a static bearer token.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStore, NotefulStore, PgStore};
pub use http::{build_router, run_server, ApiError, ServerConfig};
