//! HTTP handlers for song and playlist CRUD.

pub mod playlists;
pub mod songs;
