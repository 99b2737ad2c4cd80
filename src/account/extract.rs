//! HTML extraction for the dashboard and settings pages.

use crate::core::DashboardError;
use scraper::{Html, Selector};

use super::{AccountProfile, ApiKey};

/// The monospace span the dashboard renders the API key in.
const API_KEY_SELECTOR: &str = "span.pui-f-ubuntu-mono";

fn selector(css: &str) -> Result<Selector, DashboardError> {
    Selector::parse(css).map_err(|e| DashboardError::Parse(format!("bad selector `{css}`: {e}")))
}

/// Trimmed text of the first API-key span on the dashboard page.
pub(crate) fn extract_api_key(body: &str) -> Result<ApiKey, DashboardError> {
    let doc = Html::parse_document(body);
    let sel = selector(API_KEY_SELECTOR)?;

    let span = doc
        .select(&sel)
        .next()
        .ok_or_else(|| DashboardError::Parse(format!("`{API_KEY_SELECTOR}` not found")))?;

    Ok(ApiKey(span.text().collect::<String>().trim().to_string()))
}

/// `value` attributes of the `first_name` and `last_name` inputs on the settings page.
pub(crate) fn extract_profile(body: &str) -> Result<AccountProfile, DashboardError> {
    let doc = Html::parse_document(body);

    Ok(AccountProfile {
        first_name: input_value(&doc, "first_name")?,
        last_name: input_value(&doc, "last_name")?,
    })
}

fn input_value(doc: &Html, name: &str) -> Result<String, DashboardError> {
    let css = format!(r#"input[name="{name}"]"#);
    let sel = selector(&css)?;

    let input = doc
        .select(&sel)
        .next()
        .ok_or_else(|| DashboardError::Parse(format!("`{css}` not found")))?;

    input
        .value()
        .attr("value")
        .map(str::to_string)
        .ok_or_else(|| DashboardError::Parse(format!("`{css}` has no value attribute")))
}
