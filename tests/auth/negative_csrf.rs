use crate::common;
use httpmock::Method::{GET, POST};
use prometeo_dashboard::DashboardError;

#[tokio::test]
async fn missing_csrf_cookie_fails_before_posting() {
    let server = common::setup_server();

    // Login page answers 200 but sets no cookie at all.
    let page = server.mock(|when, then| {
        when.method(GET).path("/dashboard/login/");
        then.status(200).body("<html></html>");
    });
    let submit = server.mock(|when, then| {
        when.method(POST).path("/dashboard/login/");
        then.status(302).header("location", "/dashboard/");
    });

    let err = common::builder_for(&server)
        .login(common::credentials())
        .await
        .unwrap_err();

    page.assert();
    submit.assert_calls(0);
    assert!(matches!(err, DashboardError::AuthSetup(_)), "got {err:?}");
}

#[tokio::test]
async fn other_cookies_without_csrf_token_fail_setup() {
    let server = common::setup_server();

    let page = server.mock(|when, then| {
        when.method(GET).path("/dashboard/login/");
        then.status(200)
            .header("set-cookie", "sessionid=xyz; Path=/")
            .body("<html></html>");
    });
    let submit = server.mock(|when, then| {
        when.method(POST).path("/dashboard/login/");
        then.status(302).header("location", "/dashboard/");
    });

    let err = common::builder_for(&server)
        .login(common::credentials())
        .await
        .unwrap_err();

    page.assert();
    submit.assert_calls(0);
    match err {
        DashboardError::AuthSetup(msg) => assert!(msg.contains("csrftoken")),
        other => panic!("expected AuthSetup, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_csrf_cookie_counts_as_missing() {
    let server = common::setup_server();

    let page = server.mock(|when, then| {
        when.method(GET).path("/dashboard/login/");
        then.status(200)
            .header("set-cookie", "csrftoken=; Path=/")
            .body("<html></html>");
    });
    let submit = server.mock(|when, then| {
        when.method(POST).path("/dashboard/login/");
        then.status(302).header("location", "/dashboard/");
    });

    let err = common::builder_for(&server)
        .login(common::credentials())
        .await
        .unwrap_err();

    page.assert();
    submit.assert_calls(0);
    assert!(matches!(err, DashboardError::AuthSetup(_)), "got {err:?}");
}

#[tokio::test]
async fn login_page_error_status_is_not_an_auth_setup_error() {
    let server = common::setup_server();

    let page = server.mock(|when, then| {
        when.method(GET).path("/dashboard/login/");
        then.status(503).body("maintenance");
    });

    let err = common::builder_for(&server)
        .login(common::credentials())
        .await
        .unwrap_err();

    page.assert();
    assert!(matches!(err, DashboardError::Status { status: 503, .. }), "got {err:?}");
}
