//! Configuration error types for the ReadyCloud client.
//!
//! Configuration newtypes validate on construction and URL helpers validate
//! the configured API version before any request is sent. Both report
//! failures through [`ConfigError`].
//!
//! # Example
//!
//! ```rust
//! use readycloud::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyToken)));
//! ```

use thiserror::Error;

use crate::config::ApiVersion;

/// Errors raised while configuring the client or building request URLs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Bearer token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid ReadyCloud bearer token.")]
    EmptyToken,

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a URL with scheme (e.g., 'https://readycloud.com/').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Organization identifier cannot be empty.
    #[error("Organization id cannot be empty.")]
    EmptyOrganizationId,

    /// A required builder field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// An organization-scoped URL was requested without an organization id.
    #[error("API version {version} requires an organization id. Set one with `org_id` on the configuration builder.")]
    MissingOrganizationId {
        /// The configured API version.
        version: ApiVersion,
    },

    /// The configured API version has no URL layout.
    #[error("API version '{version}' is not implemented.")]
    UnsupportedApiVersion {
        /// The unrecognized version tag.
        version: String,
    },

    /// The endpoint does not exist under the configured API version.
    #[error("'{operation}' requires API version {required}, but the client is configured for {configured}.")]
    RequiresApiVersion {
        /// The endpoint that was requested.
        operation: &'static str,
        /// The version that provides the endpoint.
        required: ApiVersion,
        /// The version the client was configured with.
        configured: ApiVersion,
    },
}
