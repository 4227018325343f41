//! Song data models and API request/response types.
//!
//! This module defines:
//! - `SongRow`: row of the `songs` table (snake_case columns)
//! - `Song`: public model returned to clients (camelCase fields)
//! - `SongSummary`: `{id, title, performer}` projection used in lists
//! - `SongPayload`: validated body of `POST /songs` and `PUT /songs/{id}`
//! - `SongFilter`: query string of `GET /songs`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a song record from the database.
///
/// # Album Reference
///
/// `album_id` is a weak reference to `albums.id`. Deleting the album sets it
/// to NULL (`ON DELETE SET NULL`); the song itself is kept.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SongRow {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,

    /// Length in seconds
    pub duration: Option<i32>,

    pub album_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Song as exposed over the API.
///
/// Absent `duration` and `albumId` serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            year: row.year,
            genre: row.genre,
            performer: row.performer,
            duration: row.duration,
            album_id: row.album_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Minimal song projection returned by `GET /songs` and nested in albums.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct SongSummary {
    pub id: String,
    pub title: String,
    pub performer: String,
}

/// Song body after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongPayload {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
}

/// Optional filters of `GET /songs`.
///
/// Both are case-insensitive substring matches; when both are given a song
/// must match both. Empty strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongFilter {
    pub title: Option<String>,
    pub performer: Option<String>,
}

impl SongFilter {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|value| !value.is_empty())
    }

    pub fn performer(&self) -> Option<&str> {
        self.performer.as_deref().filter(|value| !value.is_empty())
    }
}

/// `data` of `POST /songs`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongIdData {
    pub song_id: String,
}

/// `data` of `GET /songs/{id}`.
#[derive(Debug, Serialize)]
pub struct SongData {
    pub song: Song,
}

/// `data` of `GET /songs`.
#[derive(Debug, Serialize)]
pub struct SongsData {
    pub songs: Vec<SongSummary>,
}
