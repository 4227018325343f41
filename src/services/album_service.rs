//! Album repository.
//!
//! Every write is a single statement; no function opens a transaction.

use chrono::Utc;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        album::{Album, AlbumPayload, AlbumRow},
        song::SongSummary,
    },
};

use super::generate_id;

/// Insert a new album and return its generated id.
///
/// # Errors
///
/// - `Internal`: the insert affected no rows
/// - `Database`: database error occurred
pub async fn add_album(pool: &DbPool, album: &AlbumPayload) -> Result<String, AppError> {
    let id = generate_id("album");
    let now = Utc::now();

    let inserted = sqlx::query(
        r#"
        INSERT INTO albums (id, name, year, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&album.name)
    .bind(album.year)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?
    .rows_affected();

    if inserted == 0 {
        return Err(AppError::Internal("Failed to add album".to_string()));
    }

    tracing::info!(album_id = %id, "album added");
    Ok(id)
}

/// Get an album by id.
///
/// # Errors
///
/// - `NotFound`: no album has this id
/// - `Database`: database error occurred
pub async fn get_album_by_id(pool: &DbPool, id: &str) -> Result<Album, AppError> {
    let row = sqlx::query_as::<_, AlbumRow>(
        "SELECT id, name, year, created_at, updated_at FROM albums WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Album not found".to_string()))?;

    Ok(row.into())
}

/// List the songs referencing an album as `{id, title, performer}`.
///
/// An album without songs (or an unknown album id) yields an empty list.
pub async fn get_songs_by_album_id(
    pool: &DbPool,
    album_id: &str,
) -> Result<Vec<SongSummary>, AppError> {
    let songs = sqlx::query_as::<_, SongSummary>(
        r#"
        SELECT id, title, performer
        FROM songs
        WHERE album_id = ?
        ORDER BY created_at, rowid
        "#,
    )
    .bind(album_id)
    .fetch_all(pool)
    .await?;

    Ok(songs)
}

/// Replace an album's name and year and refresh `updated_at`.
///
/// # Errors
///
/// - `NotFound`: no album has this id
/// - `Database`: database error occurred
pub async fn edit_album_by_id(
    pool: &DbPool,
    id: &str,
    album: &AlbumPayload,
) -> Result<(), AppError> {
    let updated = sqlx::query(
        r#"
        UPDATE albums
        SET name = ?, year = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&album.name)
    .bind(album.year)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    if updated == 0 {
        return Err(AppError::NotFound(
            "Failed to update album. Id not found".to_string(),
        ));
    }

    Ok(())
}

/// Delete an album.
///
/// Songs referencing the album are kept; the store clears their `album_id`
/// (`ON DELETE SET NULL`).
///
/// # Errors
///
/// - `NotFound`: no album has this id
/// - `Database`: database error occurred
pub async fn delete_album_by_id(pool: &DbPool, id: &str) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::NotFound(
            "Failed to delete album. Id not found".to_string(),
        ));
    }

    tracing::info!(album_id = %id, "album deleted");
    Ok(())
}
