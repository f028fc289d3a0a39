//! HTTP server command
//!
//! Connects to PostgreSQL, applies migrations, and serves the notes and
//! folders API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use noteful_server::db::{create_pool_with_options, migrations, PgStore};
use noteful_server::http::server::DEFAULT_BASE_PATH;
use noteful_server::http::{run_server, ServerConfig};

use crate::config::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "NOTEFUL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Bearer token clients must send; omit to disable auth
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Path the API is mounted under
    #[arg(long, default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,

    /// Skip running migrations at startup
    #[arg(long)]
    pub no_migrate: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args.database.require_url()?;

    tracing::info!("Starting noteful server on {}", args.bind);

    let pool = create_pool_with_options(database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    if !args.no_migrate {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        api_token: args.api_token.filter(|token| !token.is_empty()),
        base_path: args.base_path,
    };

    // Run server (blocks until shutdown)
    run_server(Arc::new(PgStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
