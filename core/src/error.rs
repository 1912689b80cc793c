//! Error types for the client core.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because they are the two
//! failures the server reports deliberately. Any other non-2xx response lands
//! in `HttpError` with the raw status code and body for debugging.

/// Errors from building requests, executing them, or parsing responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404; the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400 with its `{error}` message.
    #[error("rejected by server: {0}")]
    Validation(String),

    /// The server returned a non-2xx status other than 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The host could not complete the round-trip at all.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Errors from a `SyncLayer` action. The view is unchanged whenever one is
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("to-do text is empty")]
    EmptyText,

    #[error("todo {0} is not in the current view")]
    UnknownTodo(u64),

    #[error("todo {0} is completed and cannot be edited")]
    Completed(u64),

    #[error(transparent)]
    Api(#[from] ApiError),
}
