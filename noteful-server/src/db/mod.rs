//! Database layer - connection pool, migrations, repositories and the
//! store seam the HTTP layer talks to.
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - One query per operation, no check-then-write inside the store
//! - Listing order is `id` ascending, i.e. insertion order

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use store::{NotefulStore, PgStore};
