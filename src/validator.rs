//! Payload validation for album and song write requests.
//!
//! Validators take the raw JSON body and either return the typed payload or
//! fail with [`AppError::Validation`]. They are pure: the only outside input
//! is the current year, which callers pass in.
//!
//! The first violation wins. Schema keys are checked in declaration order,
//! then any key the schema does not know about is rejected.

use chrono::{Datelike, Local};
use serde_json::{Map, Value};

use crate::{
    error::AppError,
    models::{album::AlbumPayload, song::SongPayload},
};

/// Earliest accepted release year.
pub const MIN_YEAR: i64 = 1900;

const ALBUM_KEYS: &[&str] = &["name", "year"];
const SONG_KEYS: &[&str] = &["title", "year", "genre", "performer", "duration", "albumId"];

/// Calendar year used as the upper bound of `year` fields.
///
/// Taken from the server's local time zone, so the bound moves on the local
/// New Year rather than the UTC one.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Validate the body of `POST /albums` and `PUT /albums/{id}`.
///
/// # Schema
///
/// - `name`: required, non-empty string
/// - `year`: required integer in `[1900, current_year]`
pub fn validate_album_payload(payload: &Value, current_year: i32) -> Result<AlbumPayload, AppError> {
    let object = as_object(payload)?;

    let name = required(object, "name", string_field)?;
    let year = required(object, "year", |object, key| {
        year_field(object, key, current_year)
    })?;
    reject_unknown_keys(object, ALBUM_KEYS)?;

    Ok(AlbumPayload { name, year })
}

/// Validate the body of `POST /songs` and `PUT /songs/{id}`.
///
/// # Schema
///
/// - `title`, `genre`, `performer`: required, non-empty strings
/// - `year`: required integer in `[1900, current_year]`
/// - `duration`: optional integer `>= 0`
/// - `albumId`: optional non-empty string (existence is not checked here)
pub fn validate_song_payload(payload: &Value, current_year: i32) -> Result<SongPayload, AppError> {
    let object = as_object(payload)?;

    let title = required(object, "title", string_field)?;
    let year = required(object, "year", |object, key| {
        year_field(object, key, current_year)
    })?;
    let genre = required(object, "genre", string_field)?;
    let performer = required(object, "performer", string_field)?;
    let duration = integer_field(object, "duration", 0, i64::from(i32::MAX))?
        .map(|duration| duration as i32);
    let album_id = string_field(object, "albumId")?;
    reject_unknown_keys(object, SONG_KEYS)?;

    Ok(SongPayload {
        title,
        year,
        genre,
        performer,
        duration,
        album_id,
    })
}

fn invalid(key: &str, rule: impl std::fmt::Display) -> AppError {
    AppError::Validation(format!("\"{key}\" {rule}"))
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, AppError> {
    payload
        .as_object()
        .ok_or_else(|| invalid("value", "must be of type object"))
}

/// Turn an optional field reader into a required one.
fn required<T>(
    object: &Map<String, Value>,
    key: &str,
    read: impl Fn(&Map<String, Value>, &str) -> Result<Option<T>, AppError>,
) -> Result<T, AppError> {
    read(object, key)?.ok_or_else(|| invalid(key, "is required"))
}

fn string_field(object: &Map<String, Value>, key: &str) -> Result<Option<String>, AppError> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::String(value)) if value.is_empty() => {
            Err(invalid(key, "is not allowed to be empty"))
        }
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(invalid(key, "must be a string")),
    }
}

/// Read an integer bounded by `[min, max]`.
///
/// JSON numbers with no fractional part are integers (`1969.0` passes) and
/// numeric strings are converted, so `"1969"` is accepted as well.
fn integer_field(
    object: &Map<String, Value>,
    key: &str,
    min: i64,
    max: i64,
) -> Result<Option<i64>, AppError> {
    let Some(value) = object.get(key) else {
        return Ok(None);
    };

    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite())
    .ok_or_else(|| invalid(key, "must be a number"))?;

    if number.fract() != 0.0 {
        return Err(invalid(key, "must be an integer"));
    }
    if number < min as f64 {
        return Err(invalid(key, format!("must be greater than or equal to {min}")));
    }
    if number > max as f64 {
        return Err(invalid(key, format!("must be less than or equal to {max}")));
    }

    Ok(Some(number as i64))
}

fn year_field(
    object: &Map<String, Value>,
    key: &str,
    current_year: i32,
) -> Result<Option<i32>, AppError> {
    Ok(integer_field(object, key, MIN_YEAR, i64::from(current_year))?.map(|year| year as i32))
}

fn reject_unknown_keys(object: &Map<String, Value>, known: &[&str]) -> Result<(), AppError> {
    match object.keys().find(|key| !known.contains(&key.as_str())) {
        Some(key) => Err(invalid(key, "is not allowed")),
        None => Ok(()),
    }
}
