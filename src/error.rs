//! Error Taxonomy
//!
//! `SearchError` is what the HTTP layer turns into a status code. Input errors are the
//! caller's fault (400), an unknown school is 404, and storage failures are fatal for the
//! request (500). Ranking-strategy and analytics failures never reach this type.

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Failure of the persistence layer behind the catalog traits.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("conflicting record: {0}")]
    Conflict(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("unknown day name: {0}")]
    UnknownDay(String),

    #[error("invalid time window: {0}")]
    InvalidTimeWindow(String),

    #[error("invalid page number: {0}")]
    InvalidPage(String),

    #[error("invalid term year: {0}")]
    InvalidYear(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("unknown institution: {0}")]
    UnknownInstitution(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Body returned alongside every non-2xx status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ErrorReply = (StatusCode, Json<ErrorResponse>);

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::UnknownDay(_)
            | SearchError::InvalidTimeWindow(_)
            | SearchError::InvalidPage(_)
            | SearchError::InvalidYear(_)
            | SearchError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            SearchError::UnknownInstitution(_) => StatusCode::NOT_FOUND,
            SearchError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_reply(self) -> ErrorReply {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Search failed: {}", self);
        } else {
            tracing::debug!("Rejected search request: {}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
    }
}
