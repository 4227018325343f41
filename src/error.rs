//! Error taxonomy and HTTP error response handling.
//!
//! Every failure in the service is one of three kinds:
//!
//! - **Validation**: the client sent an invalid payload (400, `status: "fail"`)
//! - **NotFound**: the requested resource does not exist (404, `status: "fail"`)
//! - **Internal**: anything else (500, `status: "error"`)
//!
//! Internal errors never reach the client with their real message. The
//! response carries [`INTERNAL_ERROR_MESSAGE`] and the detail is logged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::envelope::Envelope;

/// Message returned to clients for every 5xx response.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred on our server";

/// Classification of an [`AppError`], which decides status code and envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// HTTP status code implied by this kind.
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application-wide error type.
///
/// Handlers and repositories return `Result<T, AppError>` and propagate with
/// `?`. A variant is only ever changed to reclassify a store outcome (zero
/// rows affected becomes `NotFound`), never to hide a client error behind an
/// internal one.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Payload failed schema validation.
    ///
    /// Returns HTTP 400 Bad Request with the validation message.
    #[error("{0}")]
    Validation(String),

    /// Requested album or song does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// An operation failed in a way the client cannot fix (e.g. an insert
    /// that affected no rows).
    #[error("{0}")]
    Internal(String),

    /// Database operation failed (connection error, query error, ...).
    ///
    /// Wraps any `sqlx::Error` via `#[from]`, so repositories can use `?`
    /// directly on driver results.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Internal(_) | AppError::Database(_) => ErrorKind::Internal,
        }
    }
}

/// Response extension marking an error response as already classified.
///
/// The response mapper middleware leaves responses carrying this marker
/// untouched and converts every other error response into the envelope.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedError(pub ErrorKind);

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// Client errors:
/// ```json
/// { "status": "fail", "message": "Album not found" }
/// ```
///
/// Internal errors:
/// ```json
/// { "status": "error", "message": "An internal error occurred on our server" }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        let body = match kind {
            ErrorKind::Validation | ErrorKind::NotFound => {
                tracing::debug!(error = %self, status = %kind.status_code(), "request rejected");
                Envelope::fail(self.to_string())
            }
            ErrorKind::Internal => {
                tracing::error!(error = ?self, "internal error while handling request");
                Envelope::error(INTERNAL_ERROR_MESSAGE)
            }
        };

        let mut response = (kind.status_code(), Json(body)).into_response();
        response.extensions_mut().insert(ClassifiedError(kind));
        response
    }
}
