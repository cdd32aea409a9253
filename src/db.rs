use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::DbConfig;

pub async fn connect(cfg: &DbConfig) -> anyhow::Result<PgPool> {
    let db = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(cfg.connect_options())
        .await
        .context("connect to database")?;
    Ok(db)
}

/// Logs which database the pool landed on and the tables it can see.
pub async fn log_schema(db: &PgPool) -> anyhow::Result<()> {
    let database: String = sqlx::query_scalar("SELECT current_database()::text")
        .fetch_one(db)
        .await
        .context("query current database")?;

    let tables: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT table_name::text
          FROM information_schema.tables
         WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
         ORDER BY table_name
        "#,
    )
    .fetch_all(db)
    .await
    .context("list tables")?;

    info!(%database, ?tables, "connected to database");
    Ok(())
}
