//! Global response mapper.
//!
//! Runs after every request, including the fallback and the method-not-allowed
//! responses axum generates on its own:
//! 1. Success responses pass through unchanged
//! 2. Error responses built from [`AppError`](crate::error::AppError) are
//!    already in the envelope format and pass through unchanged
//! 3. Any other error response (extractor rejections, 405, caught panics) is
//!    rewritten into the envelope: 4xx becomes `fail` with the original text,
//!    5xx becomes `error` with the generic message and the detail is logged

use axum::{
    Json,
    body::Body,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::{ClassifiedError, ErrorKind, INTERNAL_ERROR_MESSAGE},
    models::envelope::Envelope,
};

/// Upper bound on how much of an unclassified error body is read.
const MAX_DETAIL_BYTES: usize = 64 * 1024;

/// Response mapper middleware function.
///
/// Installed with `axum::middleware::from_fn` through `Router::layer`, so it
/// wraps every route and the fallback.
pub async fn map_response(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();

    let is_error = status.is_client_error() || status.is_server_error();
    if !is_error || response.extensions().get::<ClassifiedError>().is_some() {
        return response;
    }

    let (parts, body) = response.into_parts();
    let detail = read_detail(body).await;

    let mut mapped = if status.is_server_error() {
        tracing::error!(%status, detail = %detail, "unclassified server error");
        classified(
            ErrorKind::Internal,
            StatusCode::INTERNAL_SERVER_ERROR,
            Envelope::error(INTERNAL_ERROR_MESSAGE),
        )
    } else {
        let message = if detail.is_empty() {
            status.canonical_reason().unwrap_or("Bad Request").to_string()
        } else {
            detail
        };
        tracing::debug!(%status, message = %message, "request rejected by router");
        let kind = if status == StatusCode::NOT_FOUND {
            ErrorKind::NotFound
        } else {
            ErrorKind::Validation
        };
        classified(kind, status, Envelope::fail(message))
    };

    // 405 responses list the supported methods
    if let Some(allow) = parts.headers.get(header::ALLOW) {
        mapped.headers_mut().insert(header::ALLOW, allow.clone());
    }

    mapped
}

async fn read_detail(body: Body) -> String {
    match axum::body::to_bytes(body, MAX_DETAIL_BYTES).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "could not read error response body");
            String::new()
        }
    }
}

fn classified(kind: ErrorKind, status: StatusCode, body: Envelope) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.extensions_mut().insert(ClassifiedError(kind));
    response
}
