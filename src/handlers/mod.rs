//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Extracts path, query and body data
//! 2. Validates write payloads
//! 3. Calls the repository
//! 4. Wraps the result in the success envelope
//!
//! Errors are returned, never handled here.

use crate::error::AppError;

/// Album endpoints
pub mod albums;
/// Service health endpoint
pub mod health;
/// Song endpoints
pub mod songs;

/// Fallback for requests that match no route.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
