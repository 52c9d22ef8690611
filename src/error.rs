//! Error types for thumbnail generation
//!
//! Every failure is terminal for the request that raised it. The bridge
//! surface collapses the variants into a few stable codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, ThumbnailError>;

/// Thumbnail pipeline error
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// Locator could not be resolved, read, or parsed as a PDF
    #[error("File {0} not found")]
    NotFound(String),

    /// Request body could not be parsed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Requested page index outside `[0, page_count)`
    #[error("Page number {page} is invalid, file has {page_count} pages")]
    InvalidPage { page: i64, page_count: usize },

    /// Rasterization or compositing failed
    #[error("Render error: {0}")]
    Render(String),

    /// Encoding or filesystem failure while persisting the thumbnail
    #[error("Write error: {0}")]
    Write(String),
}

impl ThumbnailError {
    /// Bridge error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            ThumbnailError::NotFound(_) => ErrorCode::FileNotFound,
            ThumbnailError::InvalidPage { .. } => ErrorCode::InvalidPage,
            ThumbnailError::InvalidRequest(_) => ErrorCode::InvalidRequest,
            ThumbnailError::Render(_) | ThumbnailError::Write(_) => ErrorCode::InternalError,
        }
    }
}

impl From<mupdf::Error> for ThumbnailError {
    fn from(err: mupdf::Error) -> Self {
        ThumbnailError::Render(err.to_string())
    }
}

impl From<image::ImageError> for ThumbnailError {
    fn from(err: image::ImageError) -> Self {
        ThumbnailError::Write(err.to_string())
    }
}

/// Error codes reported to calling applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    FileNotFound,
    InvalidPage,
    InvalidRequest,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::InvalidPage => "INVALID_PAGE",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ErrorCode::FileNotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidPage | ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    code: ErrorCode,
    message: String,
}

impl IntoResponse for ThumbnailError {
    fn into_response(self) -> Response {
        let code = self.code();
        if code == ErrorCode::InternalError {
            tracing::error!("Thumbnail generation failed: {}", self);
        }

        let body = Json(ErrorResponse {
            code,
            message: self.to_string(),
        });

        (code.status(), body).into_response()
    }
}
