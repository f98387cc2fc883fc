//! ReadyCloud API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for selecting which URL
//! family the client talks to.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// ReadyCloud API version.
///
/// `V1` serves orders at a fixed path. `V2` scopes orders under an
/// organization and adds the organization endpoints. Any other tag parses
/// into `Custom` so that configuration never fails on it; building a URL
/// with a `Custom` version fails with [`ConfigError::UnsupportedApiVersion`].
///
/// # Example
///
/// ```rust
/// use readycloud::ApiVersion;
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// assert_eq!(version.to_string(), "v2");
///
/// let future: ApiVersion = "v3".parse().unwrap();
/// assert!(!future.is_supported());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// First API version, with unscoped order paths.
    #[default]
    V1,
    /// The multi-tenant API with organization-scoped order paths.
    V2,
    /// Version tag this client has no URL layout for.
    Custom(String),
}

impl ApiVersion {
    /// Returns the newest version this client knows.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns `true` if the client can build URLs for this version.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns all versions with a URL layout, oldest first.
    #[must_use]
    pub fn supported_versions() -> Vec<Self> {
        vec![Self::V1, Self::V2]
    }

    /// Fails closed for versions without a URL layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedApiVersion`] for `Custom` versions.
    pub fn ensure_supported(&self) -> Result<(), ConfigError> {
        match self {
            Self::V1 | Self::V2 => Ok(()),
            Self::Custom(tag) => Err(ConfigError::UnsupportedApiVersion {
                version: tag.clone(),
            }),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            "" => Err(ConfigError::UnsupportedApiVersion { version: s }),
            _ => Ok(Self::Custom(s)),
        }
    }
}
