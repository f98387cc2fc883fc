//! # ReadyCloud API client
//!
//! A thin Rust client for the ReadyCloud REST API: orders, webhooks and
//! organizations over bearer-token authenticated JSON requests.
//!
//! ## Overview
//!
//! - Configuration via [`ReadyCloudConfig`] and [`ReadyCloudConfigBuilder`]
//! - Validated newtypes for the token, host and organization id
//! - [`ApiVersion`]-dependent URL layouts (v1, v2)
//! - [`ReadyCloud`]: named resource operations
//! - [`clients::HttpClient`]: verb-level requests with response normalization
//! - A pluggable [`clients::Transport`], defaulting to reqwest
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use readycloud::ReadyCloud;
//! use std::collections::HashMap;
//!
//! let rc = ReadyCloud::new("your-token", "https://readycloud.com/")?;
//!
//! let mut params = HashMap::new();
//! params.insert("limit".to_string(), "2".to_string());
//! let orders = rc.get_orders(&params).await?;
//!
//! let created = rc.create_order(&serde_json::json!({"message": "test"})).await?;
//! if !created.is_ok() {
//!     println!("rejected with {}: {:?}", created.status_code(), created.as_map());
//! }
//! ```
//!
//! ## API v2
//!
//! ```rust
//! use readycloud::{ApiToken, ApiVersion, OrganizationId, ReadyCloud, ReadyCloudConfig};
//!
//! let config = ReadyCloudConfig::builder()
//!     .token(ApiToken::new("your-token").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .org_id(OrganizationId::new("acme").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let rc = ReadyCloud::from_config(config).unwrap();
//! assert_eq!(
//!     rc.orders_url().unwrap(),
//!     "https://readycloud.com/api/v2/orgs/acme/orders/"
//! );
//! ```
//!
//! ## Responses and Errors
//!
//! Every operation returns a [`clients::NormalizedResponse`]: the decoded
//! JSON object (or `{"content": <raw body>}` when the body is not JSON)
//! plus `status_code` and `ok`. Only status 500 is an error
//! ([`clients::ServerError`]); 4xx and other 5xx answers are returned as
//! data. URL problems ([`ConfigError`]) are reported before any request is
//! sent.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and immutable
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **No retries**: retry policy belongs to the caller

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use client::ReadyCloud;
pub use config::{
    ApiToken, ApiVersion, HostUrl, OrganizationId, ReadyCloudConfig, ReadyCloudConfigBuilder,
};
pub use error::ConfigError;

pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NormalizedResponse,
    QueryParams, ReqwestTransport, ServerError, Transport, TransportError,
};

pub use rest::resources::Webhook;
pub use rest::RestError;
