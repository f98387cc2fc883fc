//! HTTP response types for the ReadyCloud client.
//!
//! [`HttpResponse`] is what a [`Transport`](crate::clients::Transport)
//! returns: the status and the raw body. [`NormalizedResponse`] is
//! what callers receive: the decoded body as a JSON object plus the
//! `status_code` and `ok` keys.

use serde::Serialize;
use serde_json::{Map, Value};

/// Key holding the raw body when it is not a JSON object.
pub const CONTENT_KEY: &str = "content";
/// Key holding the numeric HTTP status.
pub const STATUS_CODE_KEY: &str = "status_code";
/// Key holding the success flag.
pub const OK_KEY: &str = "ok";

/// A completed response as produced by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The response body as text.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD when the
    /// body is read; see [`from_bytes`](Self::from_bytes).
    pub content: String,
}

impl HttpResponse {
    /// Creates a response from a text body.
    #[must_use]
    pub fn new(code: u16, content: impl Into<String>) -> Self {
        Self {
            code,
            content: content.into(),
        }
    }

    /// Creates a response from the body bytes as received.
    ///
    /// Valid UTF-8 is kept byte for byte. Invalid sequences are replaced
    /// with U+FFFD; this is the only place a body is decoded.
    #[must_use]
    pub fn from_bytes(code: u16, body: &[u8]) -> Self {
        Self::new(code, String::from_utf8_lossy(body))
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code
    }

    /// Returns `true` if the status code is below 400.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code < 400
    }

    /// Returns the raw body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.content)
    }
}

/// The mapping returned to callers for every non-500 response.
///
/// Always contains `status_code` and `ok`. The remaining keys are the
/// decoded JSON object, or a single `content` key holding the raw body when
/// the body is not a JSON object.
///
/// # Example
///
/// ```rust
/// use readycloud::clients::{normalize_response, HttpResponse};
/// use serde_json::json;
///
/// let normalized = normalize_response(&HttpResponse::new(200, r#"{"test": "test"}"#));
/// assert_eq!(
///     serde_json::to_value(&normalized).unwrap(),
///     json!({"test": "test", "status_code": 200, "ok": true})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedResponse {
    body: Map<String, Value>,
    #[serde(skip)]
    status_code: u16,
    #[serde(skip)]
    ok: bool,
}

impl NormalizedResponse {
    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the success flag.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.body.contains_key(key)
    }

    /// Returns the raw body if it could not be decoded as a JSON object.
    #[must_use]
    pub fn content(&self) -> Option<&Value> {
        self.body.get(CONTENT_KEY)
    }

    /// Borrows the full mapping.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Consumes the response, returning the full mapping.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.body
    }
}

impl From<NormalizedResponse> for Value {
    fn from(response: NormalizedResponse) -> Self {
        Self::Object(response.body)
    }
}

/// Builds the caller-facing mapping for a response.
///
/// Decoding failure is an expected path: a body that is not valid JSON is
/// kept verbatim under `content`. A valid JSON body that is not an object
/// is stored under `content` as its decoded value. The input is not
/// modified.
#[must_use]
pub fn normalize_response(response: &HttpResponse) -> NormalizedResponse {
    let mut body = match response.json() {
        Ok(Value::Object(map)) => map,
        Ok(other) => single_entry(CONTENT_KEY, other),
        Err(_) => single_entry(CONTENT_KEY, Value::String(response.content.clone())),
    };

    let status_code = response.status_code();
    let ok = response.is_ok();
    body.insert(STATUS_CODE_KEY.to_string(), Value::from(status_code));
    body.insert(OK_KEY.to_string(), Value::Bool(ok));

    NormalizedResponse {
        body,
        status_code,
        ok,
    }
}

fn single_entry(key: &str, value: Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    map
}
