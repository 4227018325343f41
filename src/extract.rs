//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::error::AppError;

/// Raw JSON request body, handed to a validator before use.
///
/// Unlike `axum::Json`, a missing content type or a body that is not valid
/// JSON is rejected as [`AppError::Validation`] (400), so malformed bodies
/// get the same envelope as schema violations.
#[derive(Debug)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}
