//! Error types for agent construction, initialization and dispatch.

use thiserror::Error;

/// Errors surfaced by [`crate::ChatAgent`].
///
/// Nothing is recovered internally; every variant propagates to the caller
/// with enough context to tell which phase failed.
#[derive(Debug, Error)]
pub enum AgentError {
    /// A required configuration field is missing or empty. Detected before
    /// any network call is made.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The underlying client or agent handle could not be constructed, or
    /// dispatch was attempted before initialization.
    #[error("initialization error: {0}")]
    Initialization(String),

    /// The remote call failed, was rejected, or returned no content.
    #[error("dispatch error: {cause}")]
    Dispatch { cause: String },
}

impl AgentError {
    pub(crate) fn dispatch(cause: impl Into<String>) -> Self {
        Self::Dispatch {
            cause: cause.into(),
        }
    }
}
