//! Organization operations (v2 only).
//!
//! Under v1 both operations fail with
//! [`ConfigError::RequiresApiVersion`](crate::ConfigError::RequiresApiVersion)
//! before anything is sent.

use std::fmt::Display;

use crate::clients::{NormalizedResponse, QueryParams, Transport};
use crate::rest::RestError;
use crate::ReadyCloud;

impl<T: Transport> ReadyCloud<T> {
    /// Lists the organizations visible to the token.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] unless the client is configured for v2,
    /// and [`RestError::Http`] if the request fails or the API answers 500.
    pub async fn get_organizations(
        &self,
        params: &QueryParams,
    ) -> Result<NormalizedResponse, RestError> {
        let url = self.organizations_url()?;
        Ok(self.http_client().get(&url, Some(params)).await?)
    }

    /// Fetches one organization.
    ///
    /// # Errors
    ///
    /// See [`get_organizations`](Self::get_organizations).
    pub async fn get_organization(
        &self,
        org_id: impl Display + Send,
    ) -> Result<NormalizedResponse, RestError> {
        let url = self.organization_url(org_id)?;
        Ok(self.http_client().get(&url, None).await?)
    }
}
