//! CRUD over the `Songs` table.

use crate::error::AppError;
use crate::models::{Song, SongPatch};
use sqlx::SqlitePool;

pub struct SongService;

impl SongService {
    /// All songs, ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Song>, AppError> {
        let sql = "SELECT Id, Name, Artist FROM Songs ORDER BY Id";
        tracing::debug!(sql = %sql, "query");
        let songs = sqlx::query_as::<_, Song>(sql).fetch_all(pool).await?;
        Ok(songs)
    }

    /// Fetch one song by id.
    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Song>, AppError> {
        let sql = "SELECT Id, Name, Artist FROM Songs WHERE Id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let song = sqlx::query_as::<_, Song>(sql).bind(id).fetch_optional(pool).await?;
        Ok(song)
    }

    /// Insert with the caller's id. A taken id fails with `AppError::Conflict`.
    pub async fn create(pool: &SqlitePool, song: &Song) -> Result<Song, AppError> {
        let sql = "INSERT INTO Songs (Id, Name, Artist) VALUES (?, ?, ?) RETURNING Id, Name, Artist";
        tracing::debug!(sql = %sql, id = song.id, "query");
        let row = sqlx::query_as::<_, Song>(sql)
            .bind(song.id)
            .bind(&song.name)
            .bind(&song.artist)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Overwrite name and artist. Returns the updated row, or None if the id is unknown.
    pub async fn update(pool: &SqlitePool, id: i64, patch: &SongPatch) -> Result<Option<Song>, AppError> {
        let sql = "UPDATE Songs SET Name = ?, Artist = ? WHERE Id = ? RETURNING Id, Name, Artist";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Song>(sql)
            .bind(&patch.name)
            .bind(&patch.artist)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete one row. Playlists that list the id are left untouched. Returns false if absent.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM Songs WHERE Id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
