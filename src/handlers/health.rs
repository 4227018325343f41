//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{db::DbPool, error::AppError, models::envelope::Envelope};

/// `data` of the health check response.
#[derive(Debug, Serialize)]
pub struct HealthData {
    /// Database connection status
    pub database: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "success",
///   "data": { "database": "connected", "timestamp": "2025-08-01T03:13:12Z" }
/// }
/// ```
///
/// If the database is unreachable, returns the standard internal error response.
pub async fn health_check(
    State(pool): State<DbPool>,
) -> Result<Json<Envelope<HealthData>>, AppError> {
    // Verify database connectivity with simple query
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(Json(Envelope::success(HealthData {
        database: "connected".to_string(),
        timestamp: Utc::now(),
    })))
}
