//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated ReadyCloud bearer token.
///
/// The token is sent as `AUTHORIZATION: bearer {token}` on every request.
/// Its `Debug` output is masked so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use readycloud::ApiToken;
///
/// let token = ApiToken::new("12345").unwrap();
/// assert_eq!(token.as_ref(), "12345");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token))
    }

    /// Returns the `AUTHORIZATION` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("bearer {}", self.0)
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated API host URL.
///
/// The URL must carry a scheme and a host. It is kept verbatim, including
/// any trailing slash, because the URL builder normalizes slashes anyway.
///
/// # Example
///
/// ```rust
/// use readycloud::HostUrl;
///
/// let url = HostUrl::new("https://readycloud.com/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("readycloud.com"));
/// assert_eq!(url.as_ref(), "https://readycloud.com/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// The public ReadyCloud endpoint.
    pub const DEFAULT: &'static str = "https://readycloud.com/";

    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl Default for HostUrl {
    fn default() -> Self {
        let url = Self::DEFAULT.to_string();
        Self {
            scheme_end: 5,
            host_start: 8,
            host_end: url.len() - 1,
            url,
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// A validated organization identifier for the v2 API.
///
/// # Serialization
///
/// `OrganizationId` serializes to and deserializes from a plain string:
///
/// ```rust
/// use readycloud::OrganizationId;
///
/// let org = OrganizationId::new("acme").unwrap();
/// assert_eq!(serde_json::to_string(&org).unwrap(), r#""acme""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrganizationId(String);

impl OrganizationId {
    /// Creates a new organization id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyOrganizationId`] if the id is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyOrganizationId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for OrganizationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for OrganizationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrganizationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_rejects_empty_string() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyToken)));
    }

    #[test]
    fn test_api_token_masks_value_in_debug() {
        let token = ApiToken::new("super-secret-token").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "ApiToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_api_token_bearer_value() {
        let token = ApiToken::new("12345").unwrap();
        assert_eq!(token.bearer(), "bearer 12345");
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://readycloud.com/").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("readycloud.com"));

        let url = HostUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("127.0.0.1"));
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("readycloud.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://readycloud.com").is_err());
        assert!(HostUrl::new("https:///api").is_err());
    }

    #[test]
    fn test_host_url_default_matches_validated_default() {
        assert_eq!(
            HostUrl::default(),
            HostUrl::new(HostUrl::DEFAULT).unwrap()
        );
    }

    #[test]
    fn test_organization_id_trims_and_rejects_blank() {
        assert_eq!(OrganizationId::new(" acme ").unwrap().as_ref(), "acme");
        assert!(matches!(
            OrganizationId::new("   "),
            Err(ConfigError::EmptyOrganizationId)
        ));
    }

    #[test]
    fn test_organization_id_deserialize_validates() {
        let org: OrganizationId = serde_json::from_str(r#""acme""#).unwrap();
        assert_eq!(org.to_string(), "acme");
        assert!(serde_json::from_str::<OrganizationId>(r#""""#).is_err());
    }
}
