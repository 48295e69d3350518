//! Playlist handlers, including adding a song to a playlist.

use crate::error::AppError;
use crate::extractors::{IdPath, JsonBody};
use crate::models::{Playlist, PlaylistPatch};
use crate::response::{created, no_content, ok};
use crate::service::{AddSongOutcome, PlaylistService, RequestValidator};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use serde_json::Value;

#[utoipa::path(
    get,
    path = "/playlists",
    tag = "playlists",
    responses((status = 200, description = "All playlists", body = [Playlist]))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let playlists = PlaylistService::list(&state.pool).await?;
    Ok(ok(playlists))
}

#[utoipa::path(
    get,
    path = "/playlists/{id}",
    tag = "playlists",
    params(("id" = i64, Path, description = "Playlist id")),
    responses(
        (status = 200, description = "The playlist", body = Playlist),
        (status = 404, description = "No playlist with this id")
    )
)]
pub async fn read(State(state): State<AppState>, IdPath(id): IdPath<i64>) -> Result<impl IntoResponse, AppError> {
    let playlist = PlaylistService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("playlist {}", id)))?;
    Ok(ok(playlist))
}

/// Song ids in the body are stored without checking that the songs exist.
#[utoipa::path(
    post,
    path = "/playlists",
    tag = "playlists",
    request_body = Playlist,
    responses(
        (status = 201, description = "Playlist created", body = Playlist),
        (status = 409, description = "Id already taken"),
        (status = 422, description = "Missing required field")
    )
)]
pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody<Value>) -> Result<impl IntoResponse, AppError> {
    let playlist: Playlist = RequestValidator::decode(body, &["id", "name"])?;
    let playlist = PlaylistService::create(&state.pool, &playlist).await?;
    tracing::info!(id = playlist.id, songs = playlist.songs.len(), "playlist created");
    Ok(created(format!("/playlists/{}", playlist.id), playlist))
}

#[utoipa::path(
    put,
    path = "/playlists/{id}",
    tag = "playlists",
    params(("id" = i64, Path, description = "Playlist id")),
    request_body = Playlist,
    responses(
        (status = 200, description = "Updated playlist", body = Playlist),
        (status = 404, description = "No playlist with this id")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let patch: PlaylistPatch = RequestValidator::decode(body, &["name"])?;
    let playlist = PlaylistService::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("playlist {}", id)))?;
    Ok(ok(playlist))
}

#[utoipa::path(
    post,
    path = "/playlists/{playlist_id}/songs/{song_id}",
    tag = "playlists",
    params(
        ("playlist_id" = i64, Path, description = "Playlist id"),
        ("song_id" = i64, Path, description = "Song id, must exist")
    ),
    responses(
        (status = 204, description = "Song is in the playlist"),
        (status = 404, description = "Playlist or song not found")
    )
)]
pub async fn add_song(
    State(state): State<AppState>,
    IdPath((playlist_id, song_id)): IdPath<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    match PlaylistService::add_song(&state.pool, playlist_id, song_id).await? {
        AddSongOutcome::Added => {
            tracing::info!(playlist_id, song_id, "song added to playlist");
            Ok(no_content())
        }
        AddSongOutcome::AlreadyPresent => Ok(no_content()),
        AddSongOutcome::PlaylistNotFound => Err(AppError::NotFound(format!("playlist {}", playlist_id))),
        AddSongOutcome::SongNotFound => Err(AppError::NotFound(format!("song {}", song_id))),
    }
}

#[utoipa::path(
    delete,
    path = "/playlists/{id}",
    tag = "playlists",
    params(("id" = i64, Path, description = "Playlist id")),
    responses(
        (status = 204, description = "Playlist deleted"),
        (status = 404, description = "No playlist with this id")
    )
)]
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath<i64>) -> Result<impl IntoResponse, AppError> {
    if !PlaylistService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("playlist {}", id)));
    }
    tracing::info!(id, "playlist deleted");
    Ok(no_content())
}
