use crate::core::net::{ensure_success, get_text};
use crate::{DashboardClient, DashboardError};
use serde_json::Value;

mod model;
pub use model::HistoryPeriod;

impl DashboardClient {
    /// Fetch the request history for the month fixed at construction.
    ///
    /// The body is returned as decoded JSON without any schema applied.
    ///
    /// # Errors
    ///
    /// `Decode` if the body is not valid JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(period = %self.period())))]
    pub async fn get_history(&self) -> Result<Value, DashboardError> {
        let resp = self.get(self.history_url()).send().await?;
        ensure_success(&resp)?;
        let body = get_text(resp, "history", "json").await?;

        Ok(serde_json::from_str(&body)?)
    }
}
