//! Album HTTP handlers.
//!
//! This module implements the album endpoints:
//! - POST /albums - Create album
//! - GET /albums/{id} - Get album with its songs
//! - PUT /albums/{id} - Replace album name and year
//! - DELETE /albums/{id} - Delete album (its songs are kept)
//!
//! Handlers never build error responses themselves; every `AppError` is
//! returned as-is and rendered by the error taxonomy.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    db::DbPool,
    error::AppError,
    extract::JsonPayload,
    models::{
        album::{AlbumData, AlbumIdData, AlbumWithSongs},
        envelope::Envelope,
    },
    services::album_service,
    validator,
};

/// Create a new album.
///
/// # Request Body
///
/// ```json
/// { "name": "Abbey Road", "year": 1969 }
/// ```
///
/// # Response (201)
///
/// ```json
/// {
///   "status": "success",
///   "message": "Album added successfully",
///   "data": { "albumId": "album-Qbax5Oy7L8WKf74l" }
/// }
/// ```
pub async fn post_album(
    State(pool): State<DbPool>,
    JsonPayload(payload): JsonPayload,
) -> Result<impl IntoResponse, AppError> {
    let album = validator::validate_album_payload(&payload, validator::current_year())?;
    let album_id = album_service::add_album(&pool, &album).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success_with_message(
            "Album added successfully",
            AlbumIdData { album_id },
        )),
    ))
}

/// Get an album by id, with the songs that reference it.
///
/// # Response (200)
///
/// ```json
/// {
///   "status": "success",
///   "data": {
///     "album": {
///       "id": "album-Qbax5Oy7L8WKf74l",
///       "name": "Abbey Road",
///       "year": 1969,
///       "createdAt": "2025-08-01T03:13:12Z",
///       "updatedAt": "2025-08-01T03:13:12Z",
///       "songs": [{ "id": "song-...", "title": "Something", "performer": "The Beatles" }]
///     }
///   }
/// }
/// ```
pub async fn get_album_by_id(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<AlbumData>>, AppError> {
    let album = album_service::get_album_by_id(&pool, &id).await?;
    let songs = album_service::get_songs_by_album_id(&pool, &id).await?;

    Ok(Json(Envelope::success(AlbumData {
        album: AlbumWithSongs { album, songs },
    })))
}

/// Replace an album's name and year.
pub async fn put_album_by_id(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<Envelope>, AppError> {
    let album = validator::validate_album_payload(&payload, validator::current_year())?;
    album_service::edit_album_by_id(&pool, &id, &album).await?;

    Ok(Json(Envelope::message("Album updated successfully")))
}

/// Delete an album.
///
/// Songs that referenced the album keep existing with `albumId: null`.
pub async fn delete_album_by_id(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<Envelope>, AppError> {
    album_service::delete_album_by_id(&pool, &id).await?;

    Ok(Json(Envelope::message("Album deleted successfully")))
}
