//! Request dispatcher for ReadyCloud API communication.
//!
//! This module provides the [`HttpClient`] type, which shapes requests for
//! every HTTP verb, hands them to a [`Transport`] and applies one shared
//! post-call hook to the result.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::errors::{HttpError, ServerError};
use crate::clients::http_request::{HttpMethod, HttpRequest, QueryParams};
use crate::clients::http_response::{normalize_response, HttpResponse, NormalizedResponse};
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::ApiToken;

/// The only status code the dispatcher turns into an error.
pub const SERVER_ERROR_STATUS: u16 = 500;

/// Verb-level client for the ReadyCloud API.
///
/// Every request carries `content-type: application/json` and
/// `AUTHORIZATION: bearer {token}`. Bodies are JSON-encoded before they
/// reach the transport.
///
/// Responses go through [`handle_response`](Self::handle_response): a 500
/// becomes [`HttpError::Server`], every other status is normalized and
/// returned as data.
///
/// # Example
///
/// ```rust,ignore
/// use readycloud::clients::HttpClient;
/// use readycloud::ApiToken;
///
/// let client = HttpClient::new(&ApiToken::new("12345")?)?;
/// let response = client
///     .post("https://readycloud.com/api/v1/orders/", &serde_json::json!({"message": "test"}))
///     .await?;
///
/// if !response.is_ok() {
///     println!("ReadyCloud answered {}", response.status_code());
/// }
/// ```
#[derive(Debug)]
pub struct HttpClient<T = ReqwestTransport> {
    transport: T,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient<ReqwestTransport> {
    /// Creates a client backed by [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the reqwest client cannot be built.
    pub fn new(token: &ApiToken) -> Result<Self, HttpError> {
        Ok(Self::with_transport(token, ReqwestTransport::new()?))
    }
}

impl<T: Transport> HttpClient<T> {
    /// Creates a client that sends through `transport`.
    #[must_use]
    pub fn with_transport(token: &ApiToken, transport: T) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("content-type".to_string(), "application/json".to_string());
        default_headers.insert("AUTHORIZATION".to_string(), token.bearer());

        Self {
            transport,
            default_headers,
        }
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(
        &self,
        url: &str,
        params: Option<&QueryParams>,
    ) -> Result<NormalizedResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, url);
        if let Some(params) = params {
            builder = builder.query(params.clone());
        }
        self.request(builder.headers(self.default_headers.clone()).build()?)
            .await
    }

    /// Sends a POST request with a JSON-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if `body` cannot be encoded,
    /// otherwise see [`request`](Self::request).
    pub async fn post<B>(&self, url: &str, body: &B) -> Result<NormalizedResponse, HttpError>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.send_json(HttpMethod::Post, url, body).await
    }

    /// Sends a PUT request with a JSON-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if `body` cannot be encoded,
    /// otherwise see [`request`](Self::request).
    pub async fn put<B>(&self, url: &str, body: &B) -> Result<NormalizedResponse, HttpError>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.send_json(HttpMethod::Put, url, body).await
    }

    /// Sends a PATCH request with a JSON-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if `body` cannot be encoded,
    /// otherwise see [`request`](Self::request).
    pub async fn patch<B>(&self, url: &str, body: &B) -> Result<NormalizedResponse, HttpError>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.send_json(HttpMethod::Patch, url, body).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete(&self, url: &str) -> Result<NormalizedResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, url)
            .headers(self.default_headers.clone())
            .build()?;
        self.request(request).await
    }

    async fn send_json<B>(
        &self,
        method: HttpMethod,
        url: &str,
        body: &B,
    ) -> Result<NormalizedResponse, HttpError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let encoded = serde_json::to_string(body)?;
        let request = HttpRequest::builder(method, url)
            .headers(self.default_headers.clone())
            .body(encoded)
            .build()?;
        self.request(request).await
    }

    /// Sends a prepared request and applies [`handle_response`](Self::handle_response).
    ///
    /// No retries are attempted.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport fails (`Transport`)
    /// - The response status is 500 (`Server`)
    pub async fn request(&self, request: HttpRequest) -> Result<NormalizedResponse, HttpError> {
        request.verify()?;

        tracing::debug!("ReadyCloud {} {}", request.http_method, request.url);
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        if response.status_code() == SERVER_ERROR_STATUS {
            tracing::warn!("ReadyCloud returned a server error for {}", url);
        }

        Self::handle_response(response)
    }

    /// Post-call hook shared by every verb.
    ///
    /// Status 500 fails with [`ServerError`] carrying the raw body, which is
    /// not decoded. Every other status, including other 4xx and 5xx codes,
    /// is returned as a [`NormalizedResponse`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Server`] when the status code is exactly 500.
    pub fn handle_response(response: HttpResponse) -> Result<NormalizedResponse, HttpError> {
        if response.status_code() == SERVER_ERROR_STATUS {
            return Err(ServerError {
                content: response.content,
            }
            .into());
        }
        Ok(normalize_response(&response))
    }
}
