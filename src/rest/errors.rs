//! Error type for ReadyCloud resource operations.
//!
//! Every resource operation first builds a URL, then sends one request.
//! [`RestError`] covers both stages:
//!
//! - [`RestError::Config`]: the URL could not be built (missing organization
//!   id, unsupported API version, endpoint not served by the version)
//! - [`RestError::Http`]: the request failed (status 500, transport,
//!   encoding)
//!
//! Non-500 error statuses are not errors; they come back as
//! [`NormalizedResponse`](crate::clients::NormalizedResponse) data.
//!
//! # Example
//!
//! ```rust,ignore
//! use readycloud::rest::RestError;
//!
//! match client.get_orders(&params).await {
//!     Ok(orders) if orders.is_ok() => println!("{:?}", orders),
//!     Ok(orders) => println!("ReadyCloud answered {}", orders.status_code()),
//!     Err(RestError::Config(e)) => println!("misconfigured: {e}"),
//!     Err(e) => match e.server_error() {
//!         Some(server) => println!("server failure: {}", server.content),
//!         None => println!("request failed: {e}"),
//!     },
//! }
//! ```

use crate::clients::{HttpError, ServerError};
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request URL could not be built. No request was sent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the [`ServerError`] if the API answered with status 500.
    #[must_use]
    pub const fn server_error(&self) -> Option<&ServerError> {
        match self {
            Self::Http(HttpError::Server(error)) => Some(error),
            _ => None,
        }
    }
}

impl From<ServerError> for RestError {
    fn from(error: ServerError) -> Self {
        Self::Http(HttpError::Server(error))
    }
}
