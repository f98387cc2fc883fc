//! Order operations.
//!
//! Under v1 orders live at `/api/v1/orders/`. Under v2 they are scoped
//! under the configured organization: `/api/v2/orgs/{org_id}/orders/`.
//! Order payloads are opaque: anything `Serialize` is JSON-encoded and sent
//! as-is.

use std::fmt::Display;

use serde::Serialize;

use crate::clients::{NormalizedResponse, QueryParams, Transport};
use crate::rest::RestError;
use crate::ReadyCloud;

impl<T: Transport> ReadyCloud<T> {
    /// Lists orders.
    ///
    /// `params` carries filters and pagination (`limit`, `offset`, ...) as
    /// query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the orders URL cannot be built and
    /// [`RestError::Http`] if the request fails or the API answers 500.
    pub async fn get_orders(&self, params: &QueryParams) -> Result<NormalizedResponse, RestError> {
        let url = self.orders_url()?;
        Ok(self.http_client().get(&url, Some(params)).await?)
    }

    /// Fetches one order.
    ///
    /// # Errors
    ///
    /// See [`get_orders`](Self::get_orders).
    pub async fn get_order(
        &self,
        order_id: impl Display + Send,
    ) -> Result<NormalizedResponse, RestError> {
        let url = self.order_url(order_id)?;
        Ok(self.http_client().get(&url, None).await?)
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// See [`get_orders`](Self::get_orders).
    pub async fn create_order<O>(&self, order: &O) -> Result<NormalizedResponse, RestError>
    where
        O: Serialize + ?Sized + Sync,
    {
        let url = self.orders_url()?;
        Ok(self.http_client().post(&url, order).await?)
    }

    /// Replaces an existing order.
    ///
    /// # Errors
    ///
    /// See [`get_orders`](Self::get_orders).
    pub async fn update_order<O>(
        &self,
        order_id: impl Display + Send,
        order: &O,
    ) -> Result<NormalizedResponse, RestError>
    where
        O: Serialize + ?Sized + Sync,
    {
        let url = self.order_url(order_id)?;
        Ok(self.http_client().put(&url, order).await?)
    }

    /// Updates only the given fields of an existing order.
    ///
    /// # Errors
    ///
    /// See [`get_orders`](Self::get_orders).
    pub async fn partial_update_order<O>(
        &self,
        order_id: impl Display + Send,
        order: &O,
    ) -> Result<NormalizedResponse, RestError>
    where
        O: Serialize + ?Sized + Sync,
    {
        let url = self.order_url(order_id)?;
        Ok(self.http_client().patch(&url, order).await?)
    }

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// See [`get_orders`](Self::get_orders).
    pub async fn delete_order(
        &self,
        order_id: impl Display + Send,
    ) -> Result<NormalizedResponse, RestError> {
        let url = self.order_url(order_id)?;
        Ok(self.http_client().delete(&url).await?)
    }
}
