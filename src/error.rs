//! Server error types

use axum::http::StatusCode;
use thiserror::Error;

/// Main server error type
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum ServerError {
    // ========== Lookup Errors ==========
    /// Muster sheet not found
    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    /// Attendance entry not found
    #[error("entry not found: {0}")]
    EntryNotFound(String),

    // ========== Validation Errors ==========
    /// Required field missing from a hash request
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed receipt hash (rejected before any lookup)
    #[error("invalid hash: {0}")]
    InvalidHash(String),

    /// Invalid UUID format
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    // ========== Authentication Errors ==========
    /// Missing authorization header
    #[error("authorization required")]
    AuthMissing,

    /// Invalid authorization token
    #[error("invalid authorization token")]
    AuthInvalid,

    // ========== Storage Errors ==========
    /// Storage operation failed (NOT NotFound - that becomes EntryNotFound)
    #[error("storage error: {0}")]
    Storage(StorageError),

    // ========== Server Errors ==========
    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Storage-specific errors
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database connection failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Data corruption detected (e.g. a hash attached twice)
    #[error("data corruption: {0}")]
    Corruption(String),

    /// Storage not initialized
    #[error("storage not initialized")]
    NotInitialized,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Entity not found
    #[error("not found: {0}")]
    NotFound(String),
}

/// Server result type alias
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ServerError::MissingField(_)
            | ServerError::InvalidArgument(_)
            | ServerError::InvalidHash(_)
            | ServerError::InvalidUuid(_) => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            ServerError::AuthMissing | ServerError::AuthInvalid => StatusCode::UNAUTHORIZED,

            // 404 Not Found
            ServerError::SheetNotFound(_) | ServerError::EntryNotFound(_) => {
                StatusCode::NOT_FOUND
            }

            // 500 Internal Server Error
            ServerError::Storage(_) | ServerError::Internal(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code for API response
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::SheetNotFound(_) => "SHEET_NOT_FOUND",
            ServerError::EntryNotFound(_) => "ENTRY_NOT_FOUND",
            ServerError::MissingField(_) => "MISSING_FIELD",
            ServerError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ServerError::InvalidHash(_) => "INVALID_HASH",
            ServerError::InvalidUuid(_) => "INVALID_UUID",
            ServerError::AuthMissing => "AUTH_MISSING",
            ServerError::AuthInvalid => "AUTH_INVALID",
            ServerError::Storage(_) => "STORAGE_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Check if error is recoverable (client can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ServerError::Storage(StorageError::ConnectionFailed(_))
        )
    }
}

// Conversions from external errors

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::InvalidArgument(e.to_string())
    }
}

impl From<uuid::Error> for ServerError {
    fn from(e: uuid::Error) -> Self {
        ServerError::InvalidUuid(e.to_string())
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::Storage(StorageError::Sqlite(e))
    }
}

impl From<StorageError> for ServerError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(msg) => ServerError::EntryNotFound(msg),
            other => ServerError::Storage(other),
        }
    }
}
