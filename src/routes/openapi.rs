//! OpenAPI document for the song and playlist routes. Served as JSON only.

use crate::models::{Playlist, PlaylistPatch, Song, SongPatch};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Songbook API",
        description = "CRUD for songs and playlists"
    ),
    paths(
        crate::handlers::songs::list,
        crate::handlers::songs::read,
        crate::handlers::songs::create,
        crate::handlers::songs::update,
        crate::handlers::songs::delete,
        crate::handlers::playlists::list,
        crate::handlers::playlists::read,
        crate::handlers::playlists::create,
        crate::handlers::playlists::update,
        crate::handlers::playlists::add_song,
        crate::handlers::playlists::delete,
    ),
    components(schemas(Song, SongPatch, Playlist, PlaylistPatch)),
    tags(
        (name = "songs", description = "Song CRUD"),
        (name = "playlists", description = "Playlist CRUD and song association")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json
pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
