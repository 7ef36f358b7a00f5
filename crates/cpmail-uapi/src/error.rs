//! Error types for cpmail-uapi.
//!
//! All client operations return [`Result<T>`] which uses [`UapiError`]
//! as the error type.

use thiserror::Error;

/// Errors that can occur when talking to the cPanel UAPI.
#[derive(Error, Debug)]
pub enum UapiError {
    /// Connection settings are missing or invalid (e.g. no API token).
    /// Raised before any network activity.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// A caller-supplied argument failed local validation.
    /// No request was issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP request could not complete (timeout, DNS failure,
    /// refused connection). Never retried by this layer.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The raw response body, for diagnostics.
        body: String,
    },

    /// The UAPI envelope reported an application-level failure.
    ///
    /// This is the dominant failure mode: cPanel returns HTTP 200 with
    /// `status: 0` for errors like "account already exists". The remote
    /// error text is carried verbatim.
    #[error("cPanel API error: {0}")]
    Api(String),

    /// The response body could not be parsed as a UAPI envelope.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A convenience type alias for UAPI operations.
pub type Result<T> = std::result::Result<T, UapiError>;
