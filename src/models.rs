//! Entities and request payloads.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::Json;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Song {
    #[sqlx(rename = "Id")]
    pub id: i64,
    #[sqlx(rename = "Name")]
    pub name: String,
    #[sqlx(rename = "Artist")]
    pub artist: String,
}

/// Body of PUT /songs/{id}. An `id` in the body is ignored; the path addresses the row.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct SongPatch {
    pub name: String,
    pub artist: String,
}

/// `songs` is a plain list of ids. Nothing checks that they name existing songs, and deleting a
/// song leaves it in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub songs: Vec<i64>,
}

/// Body of PUT /playlists/{id}. Replaces the name and the whole song list.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct PlaylistPatch {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub songs: Vec<i64>,
}

#[derive(sqlx::FromRow)]
pub(crate) struct PlaylistRow {
    #[sqlx(rename = "Id")]
    pub id: i64,
    #[sqlx(rename = "Name")]
    pub name: String,
    #[sqlx(rename = "Songs")]
    pub songs: Json<Vec<i64>>,
}

impl PlaylistRow {
    pub(crate) fn into_playlist(self) -> Playlist {
        Playlist {
            id: self.id,
            name: self.name,
            songs: self.songs.0,
        }
    }
}

/// `songs` may be absent or `null`; both mean an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<i64>>::deserialize(deserializer)?.unwrap_or_default())
}
