//! URL building for ReadyCloud endpoints.
//!
//! Every endpoint has a host-relative path template per API version. A
//! template is selected from the version's table, its `{name}` placeholders
//! are interpolated, and the result is joined onto the host with
//! [`urljoin`].
//!
//! # Example
//!
//! ```rust
//! use readycloud::rest::{resolve_path, urljoin, Endpoint};
//! use readycloud::ApiVersion;
//! use std::collections::HashMap;
//!
//! let mut ids = HashMap::new();
//! ids.insert("org_id", "acme".to_string());
//! ids.insert("id", "7".to_string());
//!
//! let path = resolve_path(&ApiVersion::V2, Endpoint::Order, &ids).unwrap();
//! assert_eq!(
//!     urljoin(["https://readycloud.com/", path.as_str()]),
//!     "https://readycloud.com/api/v2/orgs/acme/orders/7/"
//! );
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::config::ApiVersion;
use crate::error::ConfigError;

/// Placeholder name for the organization id.
pub const ORG_ID: &str = "org_id";
/// Placeholder name for a resource id.
pub const ID: &str = "id";

/// Joins URL parts into one URL ending in exactly one slash.
///
/// Each part has its leading and trailing slashes stripped, then the parts
/// are joined with `/` and a trailing `/` is appended. Part contents are
/// not validated; two consecutive empty parts yield a double slash.
///
/// # Example
///
/// ```rust
/// use readycloud::rest::urljoin;
///
/// assert_eq!(
///     urljoin(["https://readycloud.com/", "/api/v1/orders/"]),
///     "https://readycloud.com/api/v1/orders/"
/// );
/// assert_eq!(
///     urljoin(["https://readycloud.com", "api/v1/orders"]),
///     "https://readycloud.com/api/v1/orders/"
/// );
/// ```
#[must_use]
pub fn urljoin<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut url = parts
        .into_iter()
        .map(|part| part.as_ref().trim_matches('/').to_string())
        .collect::<Vec<_>>()
        .join("/");
    url.push('/');
    url
}

/// A ReadyCloud endpoint, independent of API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Order collection.
    Orders,
    /// Single order.
    Order,
    /// Webhook collection.
    Webhooks,
    /// Single webhook.
    Webhook,
    /// Organization collection.
    Organizations,
    /// Single organization.
    Organization,
}

impl Endpoint {
    /// Returns the endpoint name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Order => "order",
            Self::Webhooks => "webhooks",
            Self::Webhook => "webhook",
            Self::Organizations => "organizations",
            Self::Organization => "organization",
        }
    }

    /// Returns the first API version that serves this endpoint.
    #[must_use]
    pub const fn introduced_in(&self) -> ApiVersion {
        match self {
            Self::Organizations | Self::Organization => ApiVersion::V2,
            _ => ApiVersion::V1,
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path template for one endpoint under one API version.
///
/// Templates use `{id_name}` placeholders:
/// - `/api/v1/orders/{id}/` - single id
/// - `/api/v2/orgs/{org_id}/orders/{id}/` - multiple ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The endpoint this template serves.
    pub endpoint: Endpoint,
    /// Placeholders that must be supplied, in order.
    pub ids: &'static [&'static str],
    /// The host-relative template.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        endpoint: Endpoint,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            endpoint,
            ids,
            template,
        }
    }

    /// Returns the first required id missing from `available_ids`.
    #[must_use]
    pub fn missing_id(&self, available_ids: &[&str]) -> Option<&'static str> {
        self.ids
            .iter()
            .copied()
            .find(|id| !available_ids.contains(id))
    }
}

/// Templates for the v1 API.
pub const V1_PATHS: &[ResourcePath] = &[
    ResourcePath::new(Endpoint::Orders, &[], "/api/v1/orders/"),
    ResourcePath::new(Endpoint::Order, &[ID], "/api/v1/orders/{id}/"),
    ResourcePath::new(Endpoint::Webhooks, &[], "/api/v1/webhooks/"),
    ResourcePath::new(Endpoint::Webhook, &[ID], "/api/v1/webhooks/{id}/"),
];

/// Templates for the v2 API.
///
/// Webhooks keep their v1 location.
pub const V2_PATHS: &[ResourcePath] = &[
    ResourcePath::new(Endpoint::Orders, &[ORG_ID], "/api/v2/orgs/{org_id}/orders/"),
    ResourcePath::new(
        Endpoint::Order,
        &[ORG_ID, ID],
        "/api/v2/orgs/{org_id}/orders/{id}/",
    ),
    ResourcePath::new(Endpoint::Webhooks, &[], "/api/v1/webhooks/"),
    ResourcePath::new(Endpoint::Webhook, &[ID], "/api/v1/webhooks/{id}/"),
    ResourcePath::new(Endpoint::Organizations, &[], "/api/v2/orgs/"),
    ResourcePath::new(Endpoint::Organization, &[ORG_ID], "/api/v2/orgs/{org_id}"),
];

/// Returns the template table for `version`.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedApiVersion`] for versions without a
/// URL layout.
pub fn paths_for(version: &ApiVersion) -> Result<&'static [ResourcePath], ConfigError> {
    version.ensure_supported()?;
    Ok(match version {
        ApiVersion::V2 => V2_PATHS,
        _ => V1_PATHS,
    })
}

/// Selects the template serving `endpoint` from `paths`.
#[must_use]
pub fn get_path(paths: &[ResourcePath], endpoint: Endpoint) -> Option<&ResourcePath> {
    paths.iter().find(|p| p.endpoint == endpoint)
}

/// Builds a path from a template by interpolating ids.
///
/// The template is scanned once, left to right. Placeholders without a
/// value are left unchanged and interpolated values are never rescanned.
///
/// # Example
///
/// ```rust
/// use readycloud::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("org_id", "acme");
/// ids.insert("id", "7");
///
/// let path = build_path("/api/v2/orgs/{org_id}/orders/{id}/", &ids);
/// assert_eq!(path, "/api/v2/orgs/acme/orders/7/");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            result.push_str(tail);
            return result;
        };

        match ids.get(&tail[1..close]) {
            Some(value) => result.push_str(&value.to_string()),
            None => result.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    result.push_str(rest);
    result
}

/// Resolves the host-relative path of `endpoint` under `version`.
///
/// Fails closed, before any request is made:
/// - unknown version → [`ConfigError::UnsupportedApiVersion`]
/// - endpoint not served by the version → [`ConfigError::RequiresApiVersion`]
/// - `org_id` required but absent → [`ConfigError::MissingOrganizationId`]
/// - any other id absent → [`ConfigError::MissingRequiredField`]
///
/// # Errors
///
/// See above.
#[allow(clippy::implicit_hasher)]
pub fn resolve_path<V: Display>(
    version: &ApiVersion,
    endpoint: Endpoint,
    ids: &HashMap<&str, V>,
) -> Result<String, ConfigError> {
    let paths = paths_for(version)?;
    let path = get_path(paths, endpoint).ok_or_else(|| ConfigError::RequiresApiVersion {
        operation: endpoint.as_str(),
        required: endpoint.introduced_in(),
        configured: version.clone(),
    })?;

    let available: Vec<&str> = ids.keys().copied().collect();
    match path.missing_id(&available) {
        Some(ORG_ID) => Err(ConfigError::MissingOrganizationId {
            version: version.clone(),
        }),
        Some(field) => Err(ConfigError::MissingRequiredField { field }),
        None => Ok(build_path(path.template, ids)),
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Endpoint>();
    assert_send_sync::<ResourcePath>();
};
