//! Schema for the notes and folders tables

use sqlx::PgPool;

/// Create tables and indexes if they do not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running noteful migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS folders (
            id SERIAL PRIMARY KEY,
            folder_name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Deleting a folder keeps its notes and clears the reference
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            folder_id INTEGER REFERENCES folders(id) ON DELETE SET NULL,
            date_published TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_notes_folder ON notes(folder_id)")
        .execute(pool)
        .await?;

    tracing::info!("Noteful migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");
    }
}
