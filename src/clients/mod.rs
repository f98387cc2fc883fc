//! HTTP client types for ReadyCloud API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: shapes requests for every verb and applies the shared
//!   response hook
//! - [`Transport`]: the pluggable collaborator that actually sends requests;
//!   [`ReqwestTransport`] is the default
//! - [`HttpRequest`] / [`HttpMethod`]: a request ready for the transport
//! - [`HttpResponse`]: a completed response as the transport returns it
//! - [`NormalizedResponse`]: the mapping callers receive
//!
//! # Status Handling
//!
//! - **500**: fails with [`ServerError`] carrying the raw body
//! - **Anything else**: returned as a [`NormalizedResponse`] with
//!   `status_code` and `ok` keys; callers inspect them
//!
//! No retries are attempted.
//!
//! # Example
//!
//! ```rust,ignore
//! use readycloud::clients::HttpClient;
//! use readycloud::ApiToken;
//!
//! let client = HttpClient::new(&ApiToken::new("12345")?)?;
//! let response = client.get("https://readycloud.com/api/v1/orders/", None).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, InvalidHttpRequestError, ServerError, TransportError};
pub use http_client::{HttpClient, SERVER_ERROR_STATUS};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, QueryParams};
pub use http_response::{
    normalize_response, HttpResponse, NormalizedResponse, CONTENT_KEY, OK_KEY, STATUS_CODE_KEY,
};
pub use transport::{ReqwestTransport, Transport};
