//! API error types.

/// Errors that can occur while talking to the GitHub API.
///
/// Every variant is fatal to the run: there are no retries and no partial
/// results. The first failure propagates unmodified to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("GET {url} returned HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The request URL.
        url: String,
    },

    /// The request could not be completed (DNS, TLS, I/O, timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The request URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: ureq::Error,
    },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// The request URL.
        url: String,
        /// Underlying decode error.
        #[source]
        source: ureq::Error,
    },
}

impl ApiError {
    /// Creates an [`ApiError::Status`] for the given code and URL.
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    /// Returns `true` if this is a non-success HTTP status error.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ApiError>;
