//! Opening the store and creating its two collections.

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Collections are created lazily and never altered, so every statement is
/// safe to run against an existing store.
const COLLECTIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS items (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL
    )
    "#,
    // No unique constraint on name: list creation is lookup-then-insert.
    r#"
    CREATE TABLE IF NOT EXISTS lists (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL COLLATE BINARY,
        items TEXT NOT NULL DEFAULT '[]'
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_lists_name ON lists(name)",
];

fn connect_options(db_path: &str) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
}

/// Open (creating if needed) the store at `db_path` and make sure both
/// collections exist.
pub async fn init_db(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options(db_path))
        .await?;

    create_collections(&pool).await?;

    info!(path = %db_path, "Document store ready");
    Ok(pool)
}

async fn create_collections(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in COLLECTIONS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await
}
