#[cfg(feature = "test-mode")]
use std::env;

use crate::core::DashboardError;

/// Fail with `Status` unless the response carries a 2xx code.
pub(crate) fn ensure_success(resp: &reqwest::Response) -> Result<(), DashboardError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    Err(DashboardError::Status {
        status: status.as_u16(),
        url: resp.url().to_string(),
    })
}

/// Read the response body as text.
/// In `test-mode`, if `PROMETEO_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("PROMETEO_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _ext, &text)
        {
            eprintln!("PROMETEO_RECORD: failed to write fixture for {_endpoint}: {e}");
        }
    }

    Ok(text)
}
