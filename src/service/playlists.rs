//! CRUD over the `Playlists` table and song association.

use crate::error::AppError;
use crate::models::{Playlist, PlaylistPatch, PlaylistRow};
use sqlx::types::Json;
use sqlx::SqlitePool;

/// Result of [`PlaylistService::add_song`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddSongOutcome {
    Added,
    AlreadyPresent,
    PlaylistNotFound,
    SongNotFound,
}

pub struct PlaylistService;

impl PlaylistService {
    /// All playlists, ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Playlist>, AppError> {
        let sql = "SELECT Id, Name, Songs FROM Playlists ORDER BY Id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, PlaylistRow>(sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(PlaylistRow::into_playlist).collect())
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Playlist>, AppError> {
        let sql = "SELECT Id, Name, Songs FROM Playlists WHERE Id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, PlaylistRow>(sql).bind(id).fetch_optional(pool).await?;
        Ok(row.map(PlaylistRow::into_playlist))
    }

    /// Insert with the caller's id and song list. Song ids are stored as given.
    pub async fn create(pool: &SqlitePool, playlist: &Playlist) -> Result<Playlist, AppError> {
        let sql = "INSERT INTO Playlists (Id, Name, Songs) VALUES (?, ?, ?) RETURNING Id, Name, Songs";
        tracing::debug!(sql = %sql, id = playlist.id, songs = ?playlist.songs, "query");
        let row = sqlx::query_as::<_, PlaylistRow>(sql)
            .bind(playlist.id)
            .bind(&playlist.name)
            .bind(Json(&playlist.songs))
            .fetch_one(pool)
            .await?;
        Ok(row.into_playlist())
    }

    /// Replace name and the entire song list. Returns None if the id is unknown.
    pub async fn update(pool: &SqlitePool, id: i64, patch: &PlaylistPatch) -> Result<Option<Playlist>, AppError> {
        let sql = "UPDATE Playlists SET Name = ?, Songs = ? WHERE Id = ? RETURNING Id, Name, Songs";
        tracing::debug!(sql = %sql, id, songs = ?patch.songs, "query");
        let row = sqlx::query_as::<_, PlaylistRow>(sql)
            .bind(&patch.name)
            .bind(Json(&patch.songs))
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(PlaylistRow::into_playlist))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM Playlists WHERE Id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Append `song_id` to the playlist if the song exists and is not listed yet.
    /// The only write path that checks a song id against `Songs`.
    ///
    /// The existence checks and the append run as one `UPDATE`, so SQLite takes the write lock
    /// before reading and concurrent calls queue on the busy timeout instead of deadlocking.
    /// When nothing changed, follow-up reads tell the caller why.
    pub async fn add_song(pool: &SqlitePool, playlist_id: i64, song_id: i64) -> Result<AddSongOutcome, AppError> {
        let sql = r#"
            UPDATE Playlists SET Songs = json_insert(Songs, '$[#]', ?1)
            WHERE Id = ?2
              AND EXISTS (SELECT 1 FROM Songs WHERE Id = ?1)
              AND NOT EXISTS (SELECT 1 FROM json_each(Playlists.Songs) WHERE value = ?1)
        "#;
        tracing::debug!(sql = %sql, playlist_id, song_id, "query");
        let result = sqlx::query(sql).bind(song_id).bind(playlist_id).execute(pool).await?;
        if result.rows_affected() > 0 {
            return Ok(AddSongOutcome::Added);
        }

        let sql = "SELECT 1 FROM Playlists WHERE Id = ?";
        tracing::debug!(sql = %sql, id = playlist_id, "query");
        if sqlx::query_scalar::<_, i64>(sql).bind(playlist_id).fetch_optional(pool).await?.is_none() {
            return Ok(AddSongOutcome::PlaylistNotFound);
        }
        let sql = "SELECT 1 FROM Songs WHERE Id = ?";
        tracing::debug!(sql = %sql, id = song_id, "query");
        if sqlx::query_scalar::<_, i64>(sql).bind(song_id).fetch_optional(pool).await?.is_none() {
            return Ok(AddSongOutcome::SongNotFound);
        }
        Ok(AddSongOutcome::AlreadyPresent)
    }
}
