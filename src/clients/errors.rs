//! HTTP-specific error types for the ReadyCloud client.
//!
//! # Error Handling
//!
//! - [`ServerError`]: the API answered with status 500
//! - [`TransportError`]: the request never produced a response
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type encompassing all of the above
//!
//! Any status other than 500 is not an error at this layer. It is returned
//! as a [`NormalizedResponse`](crate::clients::NormalizedResponse) whose
//! `status_code` and `ok` keys the caller inspects.
//!
//! # Example
//!
//! ```rust,ignore
//! use readycloud::clients::HttpError;
//!
//! match client.get(&url, None).await {
//!     Ok(response) if response.is_ok() => println!("{:?}", response),
//!     Ok(response) => println!("API said {}", response.status_code()),
//!     Err(HttpError::Server(e)) => println!("server failure: {}", e.content),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API responds with status 500.
///
/// Carries the raw response body for diagnostics. The body is not decoded.
///
/// # Example
///
/// ```rust
/// use readycloud::clients::ServerError;
///
/// let error = ServerError { content: "<h1>Server Error</h1>".to_string() };
/// assert!(error.to_string().contains("<h1>Server Error</h1>"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ReadyCloud server error (500): {content}")]
pub struct ServerError {
    /// Raw response body.
    pub content: String,
}

/// Error returned when the transport fails to produce a response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network, TLS or decoding failure inside reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("Transport error: {message}")]
    Other {
        /// Description of the failure.
        message: String,
    },
}

/// Error returned when a request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use readycloud::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not carry a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with status 500.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// The transport did not produce a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The payload could not be JSON-encoded.
    #[error("Failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),
}
