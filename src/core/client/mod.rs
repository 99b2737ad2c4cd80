//! Public client surface + builder.
//! Internals are split into `auth` (CSRF login handshake) and `constants` (UA + defaults).

mod auth;
mod constants;

pub use auth::login_succeeded;

use crate::core::{Credentials, DashboardError};
use crate::history::HistoryPeriod;
use constants::{
    DASHBOARD_PATH, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, HISTORY_PATH,
    LOGIN_PATH, SETTINGS_PATH, USER_AGENT,
};
use reqwest::{Client, RequestBuilder, cookie::Jar};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// The form body submitted at login, replayed on every later request.
pub(crate) type LoginForm = Vec<(&'static str, String)>;

/// Endpoints derived from one base URL.
#[derive(Debug, Clone)]
pub(crate) struct Endpoints {
    pub(crate) login: Url,
    pub(crate) dashboard: Url,
    pub(crate) settings: Url,
    pub(crate) history: Url,
}

impl Endpoints {
    fn from_base(mut base: Url, period: HistoryPeriod) -> Result<Self, DashboardError> {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut history = base.join(HISTORY_PATH)?;
        history
            .query_pairs_mut()
            .append_pair("user_id", "")
            .append_pair("month", &period.month().to_string())
            .append_pair("year", &period.year().to_string());

        Ok(Self {
            login: base.join(LOGIN_PATH)?,
            dashboard: base.join(DASHBOARD_PATH)?,
            settings: base.join(SETTINGS_PATH)?,
            history,
        })
    }
}

/// An authenticated dashboard session.
///
/// A value of this type only exists after the login handshake succeeded, so every
/// getter runs on a logged-in session. Dropping the client releases its cookie jar
/// and connection pool.
///
/// The cookie jar is updated by every response; share a client between tasks only
/// behind external synchronization.
pub struct DashboardClient {
    http: Client,
    endpoints: Endpoints,
    period: HistoryPeriod,
    form: LoginForm,
}

impl DashboardClient {
    /// Create a new builder.
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    /// Log in with default settings.
    pub async fn new(credentials: Credentials) -> Result<Self, DashboardError> {
        Self::builder().login(credentials).await
    }

    /// Month and year the history feed is filtered by, fixed at construction.
    pub fn period(&self) -> HistoryPeriod {
        self.period
    }

    /// The history feed URL, including the month/year filter.
    pub fn history_url(&self) -> &Url {
        &self.endpoints.history
    }

    /// The login page URL this client authenticated against.
    pub fn login_url(&self) -> &Url {
        &self.endpoints.login
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// A GET on the live session, carrying the login form body like every
    /// request after the handshake.
    pub(crate) fn get(&self, url: &Url) -> RequestBuilder {
        self.http.get(url.clone()).form(&self.form)
    }
}

// The replayed login form carries the password, so it is left out.
impl fmt::Debug for DashboardClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardClient")
            .field("endpoints", &self.endpoints)
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct DashboardClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    period: Option<HistoryPeriod>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl DashboardClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the dashboard host (e.g., `https://prometeoapi.com/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Filter the history feed by this month instead of the current one.
    pub fn history_period(mut self, period: HistoryPeriod) -> Self {
        self.period = Some(period);
        self
    }

    /// Set the overall per-request timeout. Default: 20s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set the connect timeout. Default: 10s.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the session and run the login handshake.
    ///
    /// # Errors
    ///
    /// `AuthSetup` if the login page sets no anti-forgery cookie, `Authentication`
    /// if the server sends the login back to the login page, `Network`/`Status`
    /// for transport or HTTP failures.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, credentials), err))]
    pub async fn login(self, credentials: Credentials) -> Result<DashboardClient, DashboardError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let period = self.period.unwrap_or_else(HistoryPeriod::current);
        let endpoints = Endpoints::from_base(base_url, period)?;

        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_provider(Arc::clone(&jar))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .build()?;

        let form = auth::authenticate(&http, &jar, &endpoints.login, &credentials).await?;

        Ok(DashboardClient {
            http,
            endpoints,
            period,
            form,
        })
    }
}
