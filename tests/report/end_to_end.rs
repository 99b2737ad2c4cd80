use crate::common;
use httpmock::Method::GET;
use prometeo_dashboard::HistoryPeriod;
use serde_json::json;

#[tokio::test]
async fn full_flow_merges_profile_key_and_history() {
    let server = common::setup_server();
    let page = common::mock_login_page(&server, "abc123");
    let submit = common::mock_login_submit(&server, "abc123", "/dashboard/");
    let dashboard = common::mock_dashboard(&server);
    let settings = common::mock_settings(&server);
    let period = HistoryPeriod::new(10, 2026).unwrap();
    let history = common::mock_history(&server, period, common::fixture("history", "json"));

    let client = common::builder_for(&server)
        .history_period(period)
        .login(common::credentials())
        .await
        .unwrap();
    let report = client.fetch_report().await.unwrap();

    page.assert();
    submit.assert();
    // landing page after login + the API key read
    dashboard.assert_calls(2);
    settings.assert();
    history.assert();

    let out = serde_json::to_string(&report).unwrap();
    assert_eq!(
        out,
        r#"{"first_name":"Ada","last_name":"Lovelace","api_key":"KEY123","history":{"requests":[]}}"#
    );
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "api_key": "KEY123",
            "history": {"requests": []}
        })
    );
}

#[tokio::test]
async fn any_failing_read_fails_the_report() {
    let server = common::setup_server();
    let _login = common::mock_successful_login(&server);
    let _settings = common::mock_settings(&server);
    let _dashboard = server.mock(|when, then| {
        when.method(GET).path("/dashboard/");
        then.status(200).body("<html><body>no key here</body></html>");
    });

    let client = common::builder_for(&server)
        .login(common::credentials())
        .await
        .unwrap();
    let err = client.fetch_report().await.unwrap_err();

    assert!(!err.is_authentication());
    assert!(matches!(err, prometeo_dashboard::DashboardError::Parse(_)));
}
