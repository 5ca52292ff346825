//! Error types for the Draftboard plugin.
//!
//! This module defines the centralized error type [`DraftError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Champion loading failures never leave the client boundary as errors: they are
//! logged with their cause and collapsed into
//! [`LoadState::Failed`](crate::domain::LoadState::Failed) carrying
//! [`LOAD_FAILURE_MESSAGE`].

use thiserror::Error;

/// The single user-visible message for every champion loading failure.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load champions";

/// The main error type for Draftboard plugin operations.
///
/// # Examples
///
/// ```
/// use draftboard::domain::DraftError;
///
/// fn fetch() -> Result<(), DraftError> {
///     Err(DraftError::Transport("connection refused".to_string()))
/// }
///
/// assert!(fetch().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DraftError {
    /// The request never produced a readable response.
    ///
    /// Covers network failures reported by the host, a denied web access
    /// permission, and non-success HTTP statuses whose body is not JSON.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be parsed as the champions document.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The backend answered with a `success` flag other than `true`.
    #[error("Backend reported failure")]
    Rejected,

    /// The backend reported success but sent no `champions` field.
    #[error("Response marked successful without a champions list")]
    MissingChampions,

    /// A response arrived for a request this instance is not waiting on.
    #[error("No outstanding request with id {0}")]
    UnknownRequest(u64),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Draftboard operations.
pub type Result<T> = std::result::Result<T, DraftError>;
