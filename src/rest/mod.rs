//! REST layer of the ReadyCloud client.
//!
//! - **Path building**: [`urljoin`], [`build_path`] and the per-version
//!   template tables selected by [`resolve_path`]
//! - **[`RestError`]**: the error of every resource operation
//! - **[`resources`]**: order, webhook and organization operations on
//!   [`ReadyCloud`](crate::ReadyCloud)
//!
//! # Versioning
//!
//! | Endpoint        | v1                     | v2                               |
//! |-----------------|------------------------|----------------------------------|
//! | orders          | `/api/v1/orders/`      | `/api/v2/orgs/{org_id}/orders/`  |
//! | webhooks        | `/api/v1/webhooks/`    | `/api/v1/webhooks/`              |
//! | organizations   | -                      | `/api/v2/orgs/`                  |
//!
//! Unknown versions fail closed when a URL is built.

mod errors;
mod path;

pub mod resources;

pub use errors::RestError;
pub use path::{
    build_path, get_path, paths_for, resolve_path, urljoin, Endpoint, ResourcePath, ID, ORG_ID,
    V1_PATHS, V2_PATHS,
};
