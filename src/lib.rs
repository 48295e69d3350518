//! Songbook: song and playlist CRUD over SQLite, served with axum.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use models::{Playlist, PlaylistPatch, Song, SongPatch};
pub use routes::{app_router, common_routes, openapi_routes, playlist_routes, song_routes, ApiDoc};
pub use service::{AddSongOutcome, PlaylistService, SongService};
pub use state::AppState;
pub use store::{connect, ensure_tables};
