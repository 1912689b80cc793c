//! Store failures and their HTTP rendering.
//!
//! Every error response carries a JSON body of the form `{"error": "..."}`,
//! including axum body rejections. A non-integer id is reported like any
//! unknown id.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("To-do text is required")]
    EmptyText,

    #[error("Todo is not found")]
    NotFound(u64),
}

/// Error returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The `{id}` segment is not an integer, so no record can match it.
    #[error("Todo is not found")]
    UnknownId,

    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::EmptyText) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound(_)) | ApiError::UnknownId => StatusCode::NOT_FOUND,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "unparsable todo id");
        ApiError::UnknownId
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
