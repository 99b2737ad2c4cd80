use crate::{AccountProfile, DashboardClient, DashboardError};
use serde::Serialize;
use serde_json::Value;

/// Everything collected from one dashboard session, in output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub first_name: String,
    pub last_name: String,
    pub api_key: String,
    pub history: Value,
}

impl Report {
    pub fn new(profile: AccountProfile, api_key: impl Into<String>, history: Value) -> Self {
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            api_key: api_key.into(),
            history,
        }
    }
}

impl DashboardClient {
    /// Run the three reads in sequence and merge them into one [`Report`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch_report(&self) -> Result<Report, DashboardError> {
        let profile = self.get_profile_name().await?;
        let api_key = self.get_api_key().await?;
        let history = self.get_history().await?;

        Ok(Report::new(profile, api_key, history))
    }
}
