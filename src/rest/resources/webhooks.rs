//! Webhook operations.
//!
//! Webhooks live at `/api/v1/webhooks/` under every API version. A webhook
//! subscription is the pair of an entity name and a callback URL.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::clients::{NormalizedResponse, QueryParams, Transport};
use crate::rest::RestError;
use crate::ReadyCloud;

/// Entity name for order webhooks.
pub const ORDERS_ENTITY: &str = "orders";

/// A webhook subscription payload.
///
/// Serializes to `{"entity": ..., "url": ...}`.
///
/// # Example
///
/// ```rust
/// use readycloud::rest::resources::Webhook;
///
/// let webhook = Webhook::orders("https://example.com/hook");
/// assert_eq!(
///     serde_json::to_string(&webhook).unwrap(),
///     r#"{"entity":"orders","url":"https://example.com/hook"}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// The entity whose changes trigger the callback.
    pub entity: String,
    /// The callback URL.
    pub url: String,
}

impl Webhook {
    /// Creates a webhook for `entity` calling back `url`.
    #[must_use]
    pub fn new(entity: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            url: url.into(),
        }
    }

    /// Creates an order webhook calling back `url`.
    #[must_use]
    pub fn orders(url: impl Into<String>) -> Self {
        Self::new(ORDERS_ENTITY, url)
    }
}

impl<T: Transport> ReadyCloud<T> {
    /// Subscribes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] for unsupported API versions and
    /// [`RestError::Http`] if the request fails or the API answers 500.
    pub async fn create_webhook(&self, webhook: &Webhook) -> Result<NormalizedResponse, RestError> {
        let url = self.webhooks_url()?;
        Ok(self.http_client().post(&url, webhook).await?)
    }

    /// Replaces a webhook subscription.
    ///
    /// # Errors
    ///
    /// See [`create_webhook`](Self::create_webhook).
    pub async fn update_webhook(
        &self,
        webhook_id: impl Display + Send,
        webhook: &Webhook,
    ) -> Result<NormalizedResponse, RestError> {
        let url = self.webhook_url(webhook_id)?;
        Ok(self.http_client().put(&url, webhook).await?)
    }

    /// Lists webhook subscriptions.
    ///
    /// # Errors
    ///
    /// See [`create_webhook`](Self::create_webhook).
    pub async fn get_webhooks(&self, params: &QueryParams) -> Result<NormalizedResponse, RestError> {
        let url = self.webhooks_url()?;
        Ok(self.http_client().get(&url, Some(params)).await?)
    }

    /// Fetches one webhook subscription.
    ///
    /// # Errors
    ///
    /// See [`create_webhook`](Self::create_webhook).
    pub async fn get_webhook(
        &self,
        webhook_id: impl Display + Send,
    ) -> Result<NormalizedResponse, RestError> {
        let url = self.webhook_url(webhook_id)?;
        Ok(self.http_client().get(&url, None).await?)
    }

    /// Deletes a webhook subscription.
    ///
    /// # Errors
    ///
    /// See [`create_webhook`](Self::create_webhook).
    pub async fn delete_webhook(
        &self,
        webhook_id: impl Display + Send,
    ) -> Result<NormalizedResponse, RestError> {
        let url = self.webhook_url(webhook_id)?;
        Ok(self.http_client().delete(&url).await?)
    }

    /// Subscribes `url` to order changes.
    ///
    /// # Errors
    ///
    /// See [`create_webhook`](Self::create_webhook).
    pub async fn create_orders_webhook(
        &self,
        url: impl Into<String> + Send,
    ) -> Result<NormalizedResponse, RestError> {
        self.create_webhook(&Webhook::orders(url)).await
    }

    /// Points an existing order webhook at `url`.
    ///
    /// # Errors
    ///
    /// See [`create_webhook`](Self::create_webhook).
    pub async fn update_orders_webhook(
        &self,
        webhook_id: impl Display + Send,
        url: impl Into<String> + Send,
    ) -> Result<NormalizedResponse, RestError> {
        self.update_webhook(webhook_id, &Webhook::orders(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_webhook_fixes_entity() {
        let webhook = Webhook::orders("https://example.com/test");
        assert_eq!(webhook.entity, "orders");
        assert_eq!(webhook.url, "https://example.com/test");
    }

    #[test]
    fn test_webhook_deserializes() {
        let webhook: Webhook =
            serde_json::from_str(r#"{"entity": "orders", "url": "https://example.com/x"}"#).unwrap();
        assert_eq!(webhook, Webhook::orders("https://example.com/x"));
    }
}
