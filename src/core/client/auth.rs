//! CSRF cookie acquisition and form login for the dashboard.

use super::LoginForm;
use super::constants::{CSRF_COOKIE, CSRF_FIELD};
use crate::core::net::ensure_success;
use crate::core::{Credentials, DashboardError};
use reqwest::Client;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::REFERER;
use url::Url;

/// Whether the login POST landed somewhere other than the login page.
///
/// The dashboard answers rejected credentials by sending the browser back to the
/// login form, so landing on the login path (query and fragment ignored) is failure
/// and any other page is success.
pub fn login_succeeded(landing: &Url, login: &Url) -> bool {
    let strip = |u: &Url| {
        let mut u = u.clone();
        u.set_query(None);
        u.set_fragment(None);
        u
    };
    strip(landing) != strip(login)
}

/// Value of the cookie `name` in a `Cookie` header string (`a=1; b=2`).
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then_some(v)
    })
}

/// Run the two-step login on `http` and return the submitted form for later requests.
pub(super) async fn authenticate(
    http: &Client,
    jar: &Jar,
    login: &Url,
    credentials: &Credentials,
) -> Result<LoginForm, DashboardError> {
    let token = fetch_csrf_token(http, jar, login).await?;

    let form = vec![
        ("username", credentials.username().to_string()),
        ("password", credentials.password().to_string()),
        (CSRF_FIELD, token),
    ];
    submit_login(http, login, &form).await?;

    Ok(form)
}

async fn fetch_csrf_token(http: &Client, jar: &Jar, login: &Url) -> Result<String, DashboardError> {
    let resp = http.get(login.clone()).send().await?;
    ensure_success(&resp)?;

    let header = jar
        .cookies(login)
        .ok_or_else(|| DashboardError::AuthSetup(format!("no cookies received from {login}")))?;
    let header = header
        .to_str()
        .map_err(|_| DashboardError::AuthSetup("invalid cookie header format".into()))?;

    let token = cookie_value(header, CSRF_COOKIE)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            DashboardError::AuthSetup(format!("`{CSRF_COOKIE}` cookie missing from {login}"))
        })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(url = %login, "received anti-forgery cookie");

    Ok(token.to_string())
}

async fn submit_login(http: &Client, login: &Url, form: &LoginForm) -> Result<(), DashboardError> {
    let resp = http
        .post(login.clone())
        .header(REFERER, login.as_str())
        .form(form)
        .send()
        .await?;

    let landing = resp.url().clone();
    #[cfg(feature = "tracing")]
    tracing::debug!(landing = %landing, status = resp.status().as_u16(), "login submitted");

    if !login_succeeded(&landing, login) {
        return Err(DashboardError::Authentication {
            url: landing.to_string(),
        });
    }
    ensure_success(&resp)
}
