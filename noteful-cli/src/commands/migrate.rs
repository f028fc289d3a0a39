//! Apply the database schema without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use noteful_server::db::{create_pool_with_options, migrations};

use crate::config::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = args.database.require_url()?;

    let pool = create_pool_with_options(database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("Migrations applied");
    Ok(())
}
