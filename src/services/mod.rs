//! Repositories for albums and songs.
//!
//! Each function runs a single parameterized statement against the pool and
//! classifies the outcome:
//! - no row found / zero rows affected → `AppError::NotFound`
//! - driver failures → `AppError::Database`, rendered as an internal error

use rand::Rng;

pub mod album_service;
pub mod song_service;

/// Characters used for the random part of resource ids (URL-safe).
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of the random part of resource ids.
pub const ID_LENGTH: usize = 16;

/// Generate a resource id such as `album-V1StGXR8_Z5jdHi6`.
pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_LENGTH)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect();

    format!("{prefix}-{suffix}")
}
