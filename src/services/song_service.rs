//! Song repository.

use chrono::Utc;

use crate::{
    db::DbPool,
    error::AppError,
    models::song::{Song, SongFilter, SongPayload, SongRow, SongSummary},
};

use super::generate_id;

const UNKNOWN_ALBUM_MESSAGE: &str = "Album referenced by albumId does not exist";

/// Insert a new song and return its generated id.
///
/// # Errors
///
/// - `Validation`: `album_id` references no album
/// - `Internal`: the insert affected no rows
/// - `Database`: database error occurred
pub async fn add_song(pool: &DbPool, song: &SongPayload) -> Result<String, AppError> {
    let id = generate_id("song");
    let now = Utc::now();

    let inserted = sqlx::query(
        r#"
        INSERT INTO songs (
            id, title, year, genre, performer, duration, album_id,
            title_search, performer_search, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&song.title)
    .bind(song.year)
    .bind(&song.genre)
    .bind(&song.performer)
    .bind(song.duration)
    .bind(&song.album_id)
    .bind(search_key(&song.title))
    .bind(search_key(&song.performer))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(classify_album_reference)?
    .rows_affected();

    if inserted == 0 {
        return Err(AppError::Internal("Failed to add song".to_string()));
    }

    tracing::info!(song_id = %id, "song added");
    Ok(id)
}

/// List songs as `{id, title, performer}`, optionally filtered.
///
/// `title` and `performer` are case-insensitive substring matches combined
/// with AND. Wildcard characters in the filter match literally.
///
/// Matching runs against the lowercased `*_search` columns, so case folding
/// covers all of Unicode and not only ASCII.
pub async fn get_songs(pool: &DbPool, filter: &SongFilter) -> Result<Vec<SongSummary>, AppError> {
    let title = filter.title().map(|value| contains_pattern(&search_key(value)));
    let performer = filter
        .performer()
        .map(|value| contains_pattern(&search_key(value)));

    let songs = sqlx::query_as::<_, SongSummary>(
        r#"
        SELECT id, title, performer
        FROM songs
        WHERE (? IS NULL OR title_search LIKE ? ESCAPE '\')
          AND (? IS NULL OR performer_search LIKE ? ESCAPE '\')
        ORDER BY created_at, rowid
        "#,
    )
    .bind(&title)
    .bind(&title)
    .bind(&performer)
    .bind(&performer)
    .fetch_all(pool)
    .await?;

    Ok(songs)
}

/// Get a song by id.
///
/// # Errors
///
/// - `NotFound`: no song has this id
/// - `Database`: database error occurred
pub async fn get_song_by_id(pool: &DbPool, id: &str) -> Result<Song, AppError> {
    let row = sqlx::query_as::<_, SongRow>(
        r#"
        SELECT id, title, year, genre, performer, duration, album_id, created_at, updated_at
        FROM songs
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Song not found".to_string()))?;

    Ok(row.into())
}

/// Replace every field of a song and refresh `updated_at`.
///
/// # Errors
///
/// - `NotFound`: no song has this id
/// - `Validation`: `album_id` references no album
/// - `Database`: database error occurred
pub async fn edit_song_by_id(pool: &DbPool, id: &str, song: &SongPayload) -> Result<(), AppError> {
    let updated = sqlx::query(
        r#"
        UPDATE songs
        SET title = ?, year = ?, genre = ?, performer = ?, duration = ?, album_id = ?,
            title_search = ?, performer_search = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&song.title)
    .bind(song.year)
    .bind(&song.genre)
    .bind(&song.performer)
    .bind(song.duration)
    .bind(&song.album_id)
    .bind(search_key(&song.title))
    .bind(search_key(&song.performer))
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await
    .map_err(classify_album_reference)?
    .rows_affected();

    if updated == 0 {
        return Err(AppError::NotFound(
            "Failed to update song. Id not found".to_string(),
        ));
    }

    Ok(())
}

/// Delete a song.
///
/// # Errors
///
/// - `NotFound`: no song has this id
/// - `Database`: database error occurred
pub async fn delete_song_by_id(pool: &DbPool, id: &str) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::NotFound(
            "Failed to delete song. Id not found".to_string(),
        ));
    }

    tracing::info!(song_id = %id, "song deleted");
    Ok(())
}

/// A foreign key violation on `songs.album_id` is the client's fault.
fn classify_album_reference(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::Validation(UNKNOWN_ALBUM_MESSAGE.to_string())
        }
        _ => AppError::Database(err),
    }
}

/// Case-folded form stored in the `*_search` columns and used for filters.
fn search_key(value: &str) -> String {
    value.to_lowercase()
}

/// Build a `LIKE` pattern matching `value` anywhere, escaping `\`, `%` and `_`.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_wraps_value() {
        assert_eq!(contains_pattern("abc"), "%abc%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\"), "%c:\\\\%");
    }

    #[test]
    fn test_search_key_folds_non_ascii() {
        assert_eq!(search_key("Été Indien"), "été indien");
        assert_eq!(search_key("ÄRZTE"), "ärzte");
        assert_eq!(search_key("already lower"), "already lower");
    }

    #[test]
    fn test_non_database_errors_stay_internal() {
        let err = classify_album_reference(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Database(sqlx::Error::PoolTimedOut)));
    }
}
