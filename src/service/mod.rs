//! Song and playlist services over SQLite.

mod playlists;
mod songs;
mod validation;
pub use playlists::{AddSongOutcome, PlaylistService};
pub use songs::SongService;
pub use validation::RequestValidator;
