//! Configuration shared by subcommands
//!
//! Values come from flags first, then the environment. A `.env` file in the
//! working directory is loaded into the environment before clap parses, so
//! it behaves like exported variables.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use noteful_server::db::pool::DEFAULT_MAX_CONNECTIONS;

/// Database connection options
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum connections held by the pool
    #[arg(long, env = "NOTEFUL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn require_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
    }
}

/// Load `.env` from the working directory if present.
///
/// Returns the path that was loaded, if any. Parse errors are reported but
/// do not stop startup.
pub fn load_dotenv() -> Option<std::path::PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(err) if err.not_found() => None,
        Err(err) => {
            eprintln!("warning: failed to load .env: {}", err);
            None
        }
    }
}

/// Load an explicit env file, failing if it cannot be read.
pub fn load_env_file(path: &Path) -> Result<()> {
    dotenvy::from_path(path).with_context(|| format!("Failed to load {}", path.display()))
}
