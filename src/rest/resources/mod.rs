//! Resource operations of the ReadyCloud API.
//!
//! Each submodule adds methods to [`ReadyCloud`](crate::ReadyCloud):
//!
//! - `orders`: `get_orders`, `get_order`, `create_order`, `update_order`,
//!   `partial_update_order`, `delete_order`
//! - `webhooks`: `create_webhook`, `update_webhook`, `get_webhooks`,
//!   `get_webhook`, `delete_webhook`, `create_orders_webhook`,
//!   `update_orders_webhook`
//! - `organizations` (v2 only): `get_organizations`, `get_organization`
//!
//! Every operation returns the
//! [`NormalizedResponse`](crate::clients::NormalizedResponse) of a single
//! request. Status codes other than 500 are returned, not raised.

mod orders;
mod organizations;
mod webhooks;

pub use webhooks::{Webhook, ORDERS_ENTITY};
