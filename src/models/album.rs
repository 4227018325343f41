//! Album data models and API request/response types.
//!
//! This module defines:
//! - `AlbumRow`: row of the `albums` table (snake_case columns)
//! - `Album`: public model returned to clients (camelCase fields)
//! - `AlbumPayload`: validated body of `POST /albums` and `PUT /albums/{id}`
//! - Response `data` wrappers for the album endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::song::SongSummary;

/// Represents an album record from the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AlbumRow {
    /// `album-<random16>`, assigned on insert and never changed
    pub id: String,

    pub name: String,

    /// Release year, between 1900 and the current year at write time
    pub year: i32,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every successful edit
    pub updated_at: DateTime<Utc>,
}

/// Album as exposed over the API.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "album-Qbax5Oy7L8WKf74l",
///   "name": "Abbey Road",
///   "year": 1969,
///   "createdAt": "2025-08-01T03:13:12Z",
///   "updatedAt": "2025-08-01T03:13:12Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Convert a database row into the public album model.
impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            year: row.year,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Album body after validation.
///
/// Built only by `validator::validate_album_payload`, so every instance
/// satisfies the album schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumPayload {
    pub name: String,
    pub year: i32,
}

/// Album together with the songs that reference it.
#[derive(Debug, Serialize)]
pub struct AlbumWithSongs {
    #[serde(flatten)]
    pub album: Album,

    pub songs: Vec<SongSummary>,
}

/// `data` of `POST /albums`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumIdData {
    pub album_id: String,
}

/// `data` of `GET /albums/{id}`.
#[derive(Debug, Serialize)]
pub struct AlbumData {
    pub album: AlbumWithSongs,
}
