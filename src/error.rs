// Error taxonomy for the download path — each variant maps to one HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failure modes of a download request.
///
/// `Internal` keeps its cause so the server side can log it; the client-facing
/// message stays generic.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("{0}")]
    NotFound(String),

    #[error("Permission denied accessing digest")]
    PermissionDenied,

    #[error("File too large to download")]
    TooLarge,

    #[error("{0}")]
    Unprocessable(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl DownloadError {
    /// Classify an I/O error hit while touching files that were already
    /// listed. A file may vanish or change permissions between the listing
    /// and the read.
    pub fn from_io(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound("Digest not found".to_string()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Internal(err.into()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DownloadError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        (self.status_code(), Json(json!({ "detail": detail }))).into_response()
    }
}
