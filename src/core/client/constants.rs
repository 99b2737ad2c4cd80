//! Centralized constants for default endpoints, form fields and UA.

use std::time::Duration;

/// Default desktop UA; the dashboard serves the same pages to browsers.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Dashboard host; every endpoint below is joined onto it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://prometeoapi.com/";

pub(crate) const LOGIN_PATH: &str = "dashboard/login/";
pub(crate) const DASHBOARD_PATH: &str = "dashboard/";
pub(crate) const SETTINGS_PATH: &str = "dashboard/settings/";
pub(crate) const HISTORY_PATH: &str = "dashboard/filter_requests/";

/// Cookie set by the login page GET.
pub(crate) const CSRF_COOKIE: &str = "csrftoken";
/// Form field echoing the cookie back on the login POST.
pub(crate) const CSRF_FIELD: &str = "csrfmiddlewaretoken";

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
