//! Song handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{IdPath, JsonBody};
use crate::models::{Song, SongPatch};
use crate::response::{created, no_content, ok};
use crate::service::{RequestValidator, SongService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use serde_json::Value;

#[utoipa::path(
    get,
    path = "/songs",
    tag = "songs",
    responses((status = 200, description = "All songs", body = [Song]))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let songs = SongService::list(&state.pool).await?;
    Ok(ok(songs))
}

#[utoipa::path(
    get,
    path = "/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    responses(
        (status = 200, description = "The song", body = Song),
        (status = 404, description = "No song with this id")
    )
)]
pub async fn read(State(state): State<AppState>, IdPath(id): IdPath<i64>) -> Result<impl IntoResponse, AppError> {
    let song = SongService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("song {}", id)))?;
    Ok(ok(song))
}

#[utoipa::path(
    post,
    path = "/songs",
    tag = "songs",
    request_body = Song,
    responses(
        (status = 201, description = "Song created", body = Song),
        (status = 409, description = "Id already taken"),
        (status = 422, description = "Missing required field")
    )
)]
pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody<Value>) -> Result<impl IntoResponse, AppError> {
    let song: Song = RequestValidator::decode(body, &["id", "name", "artist"])?;
    let song = SongService::create(&state.pool, &song).await?;
    tracing::info!(id = song.id, "song created");
    Ok(created(format!("/songs/{}", song.id), song))
}

#[utoipa::path(
    put,
    path = "/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    request_body = Song,
    responses(
        (status = 200, description = "Updated song", body = Song),
        (status = 404, description = "No song with this id")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let patch: SongPatch = RequestValidator::decode(body, &["name", "artist"])?;
    let song = SongService::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("song {}", id)))?;
    Ok(ok(song))
}

#[utoipa::path(
    delete,
    path = "/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    responses(
        (status = 204, description = "Song deleted"),
        (status = 404, description = "No song with this id")
    )
)]
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath<i64>) -> Result<impl IntoResponse, AppError> {
    if !SongService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("song {}", id)));
    }
    tracing::info!(id, "song deleted");
    Ok(no_content())
}
