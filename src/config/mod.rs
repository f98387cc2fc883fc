//! Configuration types for the ReadyCloud client.
//!
//! # Overview
//!
//! - [`ReadyCloudConfig`]: token, host, API version and organization id
//! - [`ReadyCloudConfigBuilder`]: a builder for [`ReadyCloudConfig`]
//! - [`ApiToken`]: a validated bearer token with masked debug output
//! - [`HostUrl`]: a validated API host URL
//! - [`OrganizationId`]: a validated v2 organization id
//! - [`ApiVersion`]: the API version whose URL layout the client uses
//!
//! # Example
//!
//! ```rust
//! use readycloud::{ApiToken, ApiVersion, OrganizationId, ReadyCloudConfig};
//!
//! let config = ReadyCloudConfig::builder()
//!     .token(ApiToken::new("12345").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .org_id(OrganizationId::new("acme").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://readycloud.com/");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiToken, HostUrl, OrganizationId};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for a [`ReadyCloud`](crate::ReadyCloud) client.
///
/// Immutable once built. The organization id is optional here because it
/// is only needed for v2 organization-scoped URLs; a missing id is reported
/// when such a URL is built.
#[derive(Clone, Debug)]
pub struct ReadyCloudConfig {
    token: ApiToken,
    host: HostUrl,
    api_version: ApiVersion,
    org_id: Option<OrganizationId>,
}

impl ReadyCloudConfig {
    /// Creates a new builder for constructing a `ReadyCloudConfig`.
    #[must_use]
    pub fn builder() -> ReadyCloudConfigBuilder {
        ReadyCloudConfigBuilder::new()
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the API host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the organization id, if configured.
    #[must_use]
    pub const fn org_id(&self) -> Option<&OrganizationId> {
        self.org_id.as_ref()
    }
}

// Verify ReadyCloudConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReadyCloudConfig>();
};

/// Builder for [`ReadyCloudConfig`].
///
/// # Defaults
///
/// - `host`: `https://readycloud.com/`
/// - `api_version`: [`ApiVersion::V1`]
/// - `org_id`: `None`
#[derive(Debug, Default)]
pub struct ReadyCloudConfigBuilder {
    token: Option<ApiToken>,
    host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    org_id: Option<OrganizationId>,
}

impl ReadyCloudConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bearer token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the organization id used by v2 order URLs.
    #[must_use]
    pub fn org_id(mut self, org_id: OrganizationId) -> Self {
        self.org_id = Some(org_id);
        self
    }

    /// Builds the [`ReadyCloudConfig`].
    ///
    /// The API version is not checked here; an unsupported version is
    /// reported when the first URL is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<ReadyCloudConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(ReadyCloudConfig {
            token,
            host: self.host.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            org_id: self.org_id,
        })
    }
}
