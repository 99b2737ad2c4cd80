//! prometeo-dashboard: log in to the Prometeo API dashboard and read account data.
//!
//! A [`DashboardClient`] performs the CSRF-protected login handshake when it is
//! constructed, then exposes three reads on the authenticated session:
//! the API key, the account holder's name, and the current month's request history.
//!
//! ```no_run
//! use prometeo_dashboard::{Credentials, DashboardClient};
//!
//! # async fn run() -> Result<(), prometeo_dashboard::DashboardError> {
//! let client = DashboardClient::new(Credentials::new("me@example.com", "secret")).await?;
//! let report = client.fetch_report().await?;
//! println!("{}", serde_json::to_string(&report).unwrap());
//! # Ok(())
//! # }
//! ```

pub mod core;

/// Dashboard and settings page scraping (API key, account holder name).
pub mod account;
/// Monthly request history feed.
pub mod history;
/// Merged output record.
pub mod report;

pub use account::{AccountProfile, ApiKey};
pub use crate::core::client::login_succeeded;
pub use crate::core::{Credentials, DashboardClient, DashboardClientBuilder, DashboardError};
pub use history::HistoryPeriod;
pub use report::Report;
