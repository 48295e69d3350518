//! SQLite connection setup and table DDL.
//!
//! The pool returned by [`connect`] is process-scoped: open it once at startup, hand clones to
//! every handler through [`crate::AppState`], and call `SqlitePool::close` at shutdown.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub const SONGS_TABLE: &str = "Songs";
pub const PLAYLISTS_TABLE: &str = "Playlists";

/// True when the URL names an in-memory database.
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open the pool and create tables if absent.
///
/// An in-memory database disappears with its last connection and each new connection sees an
/// empty store, so in-memory pools are pinned to exactly one connection that is never reaped.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = if is_in_memory(&config.database_url) {
        tracing::info!("opening in-memory store (single shared connection)");
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        tracing::info!(url = %config.database_url, max_connections = config.max_connections, "opening file store");
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options.journal_mode(SqliteJournalMode::Wal))
            .await?
    };
    ensure_tables(&pool).await?;
    Ok(pool)
}

/// Create `Songs` and `Playlists` if they do not exist. No migration history is kept.
/// `Playlists.Songs` holds a JSON array of song ids with no foreign key to `Songs`.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    let songs_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            Id INTEGER NOT NULL PRIMARY KEY,
            Name TEXT NOT NULL,
            Artist TEXT NOT NULL
        )
        "#,
        SONGS_TABLE
    );
    sqlx::query(&songs_ddl).execute(pool).await?;

    let playlists_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            Id INTEGER NOT NULL PRIMARY KEY,
            Name TEXT NOT NULL,
            Songs TEXT NOT NULL DEFAULT '[]'
        )
        "#,
        PLAYLISTS_TABLE
    );
    sqlx::query(&playlists_ddl).execute(pool).await?;
    tracing::debug!("tables ensured");
    Ok(())
}
