use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A transport-level failure: DNS, refused connection, TLS, or timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The login page did not set the anti-forgery cookie, so no login can be submitted.
    #[error("login setup failed: {0}")]
    AuthSetup(String),

    /// The login submission landed back on the login page; the credentials were rejected.
    #[error("authentication failed: redirected back to {url}")]
    Authentication {
        /// The landing URL after the login POST.
        url: String,
    },

    /// The server returned an unsuccessful HTTP status code.
    #[error("unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// An expected HTML element or attribute was missing from a fetched page.
    #[error("page format unexpected or missing element: {0}")]
    Parse(String),

    /// The history feed body was not valid JSON.
    #[error("history body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DashboardError {
    /// True when the server rejected the submitted credentials.
    pub fn is_authentication(&self) -> bool {
        matches!(self, DashboardError::Authentication { .. })
    }
}
