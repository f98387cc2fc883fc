//! The top-level ReadyCloud client.
//!
//! [`ReadyCloud`] owns an immutable [`ReadyCloudConfig`] and an
//! [`HttpClient`]. Resource operations live in
//! [`rest::resources`](crate::rest::resources); this module holds
//! construction and URL helpers.

use std::collections::HashMap;
use std::fmt::Display;

use crate::clients::{HttpClient, ReqwestTransport, Transport};
use crate::config::{ApiToken, ApiVersion, HostUrl, ReadyCloudConfig};
use crate::error::ConfigError;
use crate::rest::{resolve_path, urljoin, Endpoint, RestError, ID, ORG_ID};

/// Client for the ReadyCloud API.
///
/// Stateless between calls: each operation builds one URL from the
/// configuration and sends one request. Safe to share across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use readycloud::ReadyCloud;
/// use std::collections::HashMap;
///
/// let rc = ReadyCloud::new("12345", "https://readycloud.com/")?;
///
/// let mut params = HashMap::new();
/// params.insert("limit".to_string(), "2".to_string());
/// let orders = rc.get_orders(&params).await?;
///
/// println!("status {}: {:?}", orders.status_code(), orders.get("results"));
/// ```
#[derive(Debug)]
pub struct ReadyCloud<T = ReqwestTransport> {
    config: ReadyCloudConfig,
    http_client: HttpClient<T>,
}

// Verify ReadyCloud is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReadyCloud>();
};

impl ReadyCloud<ReqwestTransport> {
    /// Creates a v1 client for `token` against `host`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the token is empty or the host is
    /// not a URL, and [`RestError::Http`] if the HTTP client cannot be built.
    pub fn new(token: &str, host: &str) -> Result<Self, RestError> {
        let config = ReadyCloudConfig::builder()
            .token(ApiToken::new(token)?)
            .host(HostUrl::new(host)?)
            .build()?;
        Self::from_config(config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: ReadyCloudConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config.token())?;
        Ok(Self::create_client(config, http_client))
    }
}

impl<T: Transport> ReadyCloud<T> {
    /// Creates a client that sends through `transport`.
    #[must_use]
    pub fn with_transport(config: ReadyCloudConfig, transport: T) -> Self {
        let http_client = HttpClient::with_transport(config.token(), transport);
        Self::create_client(config, http_client)
    }

    fn create_client(config: ReadyCloudConfig, http_client: HttpClient<T>) -> Self {
        tracing::debug!(
            "ReadyCloud client for {} using API version {}",
            config.host().as_ref(),
            config.api_version()
        );
        if !config.api_version().is_supported() {
            tracing::warn!(
                "ReadyCloud API version {} is not implemented; requests will fail",
                config.api_version()
            );
        }

        Self {
            config,
            http_client,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ReadyCloudConfig {
        &self.config
    }

    /// Returns the configured API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        self.config.api_version()
    }

    /// Returns the verb-level client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient<T> {
        &self.http_client
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn get_headers(&self) -> &HashMap<String, String> {
        self.http_client.default_headers()
    }

    /// Returns the absolute URL of the order collection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingOrganizationId`] under v2 without an
    /// organization id, and [`ConfigError::UnsupportedApiVersion`] for
    /// unknown versions.
    pub fn orders_url(&self) -> Result<String, ConfigError> {
        self.endpoint_url(Endpoint::Orders, self.scoped_ids())
    }

    /// Returns the absolute URL of one order.
    ///
    /// # Errors
    ///
    /// Same as [`orders_url`](Self::orders_url).
    pub fn order_url(&self, order_id: impl Display) -> Result<String, ConfigError> {
        let mut ids = self.scoped_ids();
        ids.insert(ID, order_id.to_string());
        self.endpoint_url(Endpoint::Order, ids)
    }

    /// Returns the absolute URL of the webhook collection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedApiVersion`] for unknown versions.
    pub fn webhooks_url(&self) -> Result<String, ConfigError> {
        self.endpoint_url(Endpoint::Webhooks, HashMap::new())
    }

    /// Returns the absolute URL of one webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedApiVersion`] for unknown versions.
    pub fn webhook_url(&self, webhook_id: impl Display) -> Result<String, ConfigError> {
        let mut ids = HashMap::new();
        ids.insert(ID, webhook_id.to_string());
        self.endpoint_url(Endpoint::Webhook, ids)
    }

    /// Returns the absolute URL of the organization collection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RequiresApiVersion`] unless configured for v2.
    pub fn organizations_url(&self) -> Result<String, ConfigError> {
        self.endpoint_url(Endpoint::Organizations, HashMap::new())
    }

    /// Returns the absolute URL of one organization.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RequiresApiVersion`] unless configured for v2.
    pub fn organization_url(&self, org_id: impl Display) -> Result<String, ConfigError> {
        let mut ids = HashMap::new();
        ids.insert(ORG_ID, org_id.to_string());
        self.endpoint_url(Endpoint::Organization, ids)
    }

    fn scoped_ids(&self) -> HashMap<&'static str, String> {
        let mut ids = HashMap::new();
        if let Some(org_id) = self.config.org_id() {
            ids.insert(ORG_ID, org_id.to_string());
        }
        ids
    }

    fn endpoint_url(
        &self,
        endpoint: Endpoint,
        ids: HashMap<&'static str, String>,
    ) -> Result<String, ConfigError> {
        let path = resolve_path(self.config.api_version(), endpoint, &ids)?;
        Ok(urljoin([self.config.host().as_ref(), path.as_str()]))
    }
}
