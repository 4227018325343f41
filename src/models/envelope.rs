//! The uniform `{status, message?, data?}` JSON response shape.

use serde::Serialize;

/// Outcome vocabulary shared by every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

/// Response body returned by every endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": "success",
///   "message": "Album added successfully",
///   "data": { "albumId": "album-Qbax5Oy7L8WKf74l" }
/// }
/// ```
///
/// `message` and `data` are omitted from the JSON when absent.
#[derive(Debug, Serialize)]
pub struct Envelope<T = ()> {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    /// Success carrying both a confirmation message and data (used on create).
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope {
    /// Success confirmation without data (used on update and delete).
    pub fn message(message: impl Into<String>) -> Self {
        Self::with_status(Status::Success, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::with_status(Status::Fail, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_status(Status::Error, message)
    }

    fn with_status(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            data: None,
        }
    }
}
