//! Error types for Folio Core

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Top-level error type for all Folio operations
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Screen error: {0}")]
    Screen(#[from] ScreenError),

    #[error("Field error: {0}")]
    Field(#[from] FieldParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a remote failure.
///
/// Every screen decides its user-facing message from this alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The remote reported that the book does not exist
    NotFound,

    /// The remote could not be reached at all
    NetworkUnreachable,

    /// Any other failure
    Other,
}

/// Errors reported by a book API backend
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("API unreachable at {endpoint}: {reason}")]
    Unreachable { endpoint: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Classify this error for message selection
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::NotFound(_) => FailureKind::NotFound,
            ApiError::Unreachable { .. } => FailureKind::NetworkUnreachable,
            ApiError::Timeout
            | ApiError::Status(_)
            | ApiError::Decode(_)
            | ApiError::Transport(_) => FailureKind::Other,
        }
    }
}

/// User-facing errors. The `Display` output is the exact text a screen shows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScreenError {
    #[error("Invalid ISBN provided")]
    MissingIdentifier,

    #[error("Book not found")]
    NotFound,

    #[error("Network error. Please check if the API server is running on {endpoint}")]
    NetworkUnreachable { endpoint: String },

    #[error("Failed to update book")]
    UpdateRejected,

    #[error("Failed to load book details. Please try again later.")]
    GenericFailure,
}

impl ScreenError {
    /// Map a failed fetch onto the message shown in place of the screen
    pub fn from_fetch(err: &ApiError) -> Self {
        match err {
            ApiError::NotFound(_) => ScreenError::NotFound,
            ApiError::Unreachable { endpoint, .. } => ScreenError::NetworkUnreachable {
                endpoint: endpoint.clone(),
            },
            _ => ScreenError::GenericFailure,
        }
    }

    /// Map a failed update onto a notification. Only "not found" is singled out.
    pub fn from_update(err: &ApiError) -> Self {
        match err.kind() {
            FailureKind::NotFound => ScreenError::NotFound,
            FailureKind::NetworkUnreachable | FailureKind::Other => ScreenError::UpdateRejected,
        }
    }

    /// The message shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Errors from assigning raw text to a draft field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldParseError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("{field} expects a non-negative number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Expected field=value, got '{0}'")]
    MalformedAssignment(String),
}
