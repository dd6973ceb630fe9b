//! Fetch failures and their classification.
//!
//! The screen only distinguishes two failure classes, so every
//! [`FetchError`] collapses to a [`FailureKind`]. Details stay in the log.

use thiserror::Error;

/// Coarse failure class shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Anything that is not a transport problem (bad status, bad payload).
    Generic,
    /// The request never completed: connect, timeout, body read.
    Io,
}

/// Errors that can occur while fetching the directory.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Configured endpoint is not a valid URL
    #[error("Invalid source URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to connect to the directory service
    #[error("Connection failed to '{url}': {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded its timeout
    #[error("Request timeout after {seconds}s")]
    Timeout { seconds: u64 },

    /// Transport failure after the connection was made
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Directory service returned status {status}")]
    Status { status: u16 },

    /// Payload is not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Map error variant to the class the screen displays
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Connect { .. }
            | FetchError::Timeout { .. }
            | FetchError::Transport(_)
            | FetchError::Body(_) => FailureKind::Io,
            FetchError::Client(_)
            | FetchError::InvalidUrl { .. }
            | FetchError::Status { .. }
            | FetchError::Decode(_) => FailureKind::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_generic() {
        let err = FetchError::Status { status: 503 };
        assert_eq!(err.kind(), FailureKind::Generic);
        assert_eq!(err.to_string(), "Directory service returned status 503");
    }

    #[test]
    fn decode_errors_are_generic() {
        let err: FetchError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert_eq!(err.kind(), FailureKind::Generic);
    }

    #[test]
    fn timeouts_are_io() {
        let err = FetchError::Timeout { seconds: 30 };
        assert_eq!(err.kind(), FailureKind::Io);
    }
}
