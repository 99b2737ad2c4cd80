use serde::Serialize;
use std::fmt;

/// The account holder's name as shown in the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountProfile {
    pub first_name: String,
    pub last_name: String,
}

/// The account's API key as displayed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApiKey(pub String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ApiKey> for String {
    fn from(k: ApiKey) -> Self {
        k.0
    }
}
