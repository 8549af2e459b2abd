//! Error types for the job board.
//!
//! This module defines the crate-wide error type [`JobBoardError`], the fetch-path
//! error [`FetchError`], and a [`Result`] alias. All errors are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// Failure of a single fetch attempt.
///
/// Every variant is terminal for the attempt that produced it: nothing is retried
/// automatically. The `Display` output is the human-readable message handed to the
/// presentation layer.
///
/// # Examples
///
/// ```
/// use jobboard::FetchError;
///
/// let err = FetchError::HttpStatus { status: 503 };
/// assert_eq!(err.to_string(), "server responded with HTTP 503");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// One record in the batch could not be decoded.
    ///
    /// A single bad record invalidates the whole batch; partial batches are never
    /// returned.
    #[error("job record {index} is malformed: {reason}")]
    MalformedRecord {
        /// Zero-based position of the offending record in the payload.
        index: usize,
        /// Decoder message describing what was wrong.
        reason: String,
    },

    /// The request never produced a response (DNS, connect, TLS, read).
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with HTTP {status}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The transport succeeded but the body is not a JSON array of records.
    #[error("response body is not a job list: {0}")]
    DecodeFailure(String),
}

/// The main error type for job board operations.
///
/// Wraps fetch failures along with the ambient failure modes of the crate
/// (configuration, I/O, worker communication, invalid criteria).
#[derive(Debug, Error)]
pub enum JobBoardError {
    /// A fetch attempt failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filter criteria violate an invariant (e.g. salary min above max).
    #[error("Invalid filter criteria: {0}")]
    Criteria(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for job board operations.
pub type Result<T> = std::result::Result<T, JobBoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_render_human_readable_messages() {
        let malformed = FetchError::MalformedRecord {
            index: 3,
            reason: "missing field `title`".to_string(),
        };
        assert_eq!(
            malformed.to_string(),
            "job record 3 is malformed: missing field `title`"
        );
        assert_eq!(
            FetchError::NetworkFailure("connection refused".to_string()).to_string(),
            "network failure: connection refused"
        );
    }

    #[test]
    fn fetch_error_converts_into_crate_error() {
        let err: JobBoardError = FetchError::HttpStatus { status: 404 }.into();
        assert!(matches!(err, JobBoardError::Fetch(FetchError::HttpStatus { status: 404 })));
        assert_eq!(err.to_string(), "Fetch error: server responded with HTTP 404");
    }
}
