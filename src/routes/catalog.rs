//! Song and playlist routes.

use crate::handlers::{playlists, songs};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn song_routes(state: AppState) -> Router {
    Router::new()
        .route("/songs", get(songs::list).post(songs::create))
        .route(
            "/songs/:id",
            get(songs::read).put(songs::update).delete(songs::delete),
        )
        .with_state(state)
}

pub fn playlist_routes(state: AppState) -> Router {
    Router::new()
        .route("/playlists", get(playlists::list).post(playlists::create))
        .route(
            "/playlists/:id",
            get(playlists::read).put(playlists::update).delete(playlists::delete),
        )
        .route("/playlists/:playlist_id/songs/:song_id", post(playlists::add_song))
        .with_state(state)
}
