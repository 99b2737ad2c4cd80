use crate::core::net::{ensure_success, get_text};
use crate::{DashboardClient, DashboardError};

mod extract;
mod model;
pub use model::{AccountProfile, ApiKey};

impl DashboardClient {
    /// Fetch the dashboard page and read the API key shown on it.
    ///
    /// # Errors
    ///
    /// `Parse` if the page has no API-key element.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_api_key(&self) -> Result<ApiKey, DashboardError> {
        let url = &self.endpoints().dashboard;
        let resp = self.get(url).send().await?;
        ensure_success(&resp)?;
        let body = get_text(resp, "dashboard", "html").await?;

        extract::extract_api_key(&body)
    }

    /// Fetch the settings page and read the account holder's first and last name.
    ///
    /// # Errors
    ///
    /// `Parse` if either name input or its `value` is missing.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_profile_name(&self) -> Result<AccountProfile, DashboardError> {
        let url = &self.endpoints().settings;
        let resp = self.get(url).send().await?;
        ensure_success(&resp)?;
        let body = get_text(resp, "settings", "html").await?;

        extract::extract_profile(&body)
    }
}
