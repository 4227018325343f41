//! Song HTTP handlers.
//!
//! This module implements the song endpoints:
//! - POST /songs - Create song
//! - GET /songs - List songs, filtered by `title` and/or `performer`
//! - GET /songs/{id} - Get song
//! - PUT /songs/{id} - Replace song
//! - DELETE /songs/{id} - Delete song

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::DbPool,
    error::AppError,
    extract::JsonPayload,
    models::{
        envelope::Envelope,
        song::{SongData, SongFilter, SongIdData, SongsData},
    },
    services::song_service,
    validator,
};

/// Create a new song.
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Something",
///   "year": 1969,
///   "genre": "Rock",
///   "performer": "The Beatles",
///   "duration": 182,
///   "albumId": "album-Qbax5Oy7L8WKf74l"
/// }
/// ```
///
/// `duration` and `albumId` are optional.
///
/// # Response (201)
///
/// ```json
/// {
///   "status": "success",
///   "message": "Song added successfully",
///   "data": { "songId": "song-Qbax5Oy7L8WKf74l" }
/// }
/// ```
pub async fn post_song(
    State(pool): State<DbPool>,
    JsonPayload(payload): JsonPayload,
) -> Result<impl IntoResponse, AppError> {
    let song = validator::validate_song_payload(&payload, validator::current_year())?;
    let song_id = song_service::add_song(&pool, &song).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success_with_message(
            "Song added successfully",
            SongIdData { song_id },
        )),
    ))
}

/// List songs.
///
/// # Query Parameters
///
/// - `title` - case-insensitive substring of the title
/// - `performer` - case-insensitive substring of the performer
///
/// # Response (200)
///
/// ```json
/// {
///   "status": "success",
///   "data": { "songs": [{ "id": "song-...", "title": "Something", "performer": "The Beatles" }] }
/// }
/// ```
pub async fn get_songs(
    State(pool): State<DbPool>,
    Query(filter): Query<SongFilter>,
) -> Result<Json<Envelope<SongsData>>, AppError> {
    let songs = song_service::get_songs(&pool, &filter).await?;

    Ok(Json(Envelope::success(SongsData { songs })))
}

/// Get a song by id.
pub async fn get_song_by_id(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<SongData>>, AppError> {
    let song = song_service::get_song_by_id(&pool, &id).await?;

    Ok(Json(Envelope::success(SongData { song })))
}

/// Replace a song. Takes the same body as `POST /songs`.
pub async fn put_song_by_id(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<Envelope>, AppError> {
    let song = validator::validate_song_payload(&payload, validator::current_year())?;
    song_service::edit_song_by_id(&pool, &id, &song).await?;

    Ok(Json(Envelope::message("Song updated successfully")))
}

/// Delete a song.
pub async fn delete_song_by_id(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<Envelope>, AppError> {
    song_service::delete_song_by_id(&pool, &id).await?;

    Ok(Json(Envelope::message("Song deleted successfully")))
}
