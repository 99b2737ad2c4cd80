use crate::common;
use chrono::NaiveDate;
use prometeo_dashboard::HistoryPeriod;

#[test]
fn month_must_be_in_range() {
    assert!(HistoryPeriod::new(0, 2026).is_none());
    assert!(HistoryPeriod::new(13, 2026).is_none());
    let p = HistoryPeriod::new(12, 2025).unwrap();
    assert_eq!((p.month(), p.year()), (12, 2025));
    assert_eq!(p.to_string(), "2025-12");
}

#[test]
fn containing_takes_month_and_year_of_the_date() {
    let p = HistoryPeriod::containing(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    assert_eq!(p, HistoryPeriod::new(1, 2026).unwrap());
}

#[tokio::test]
async fn default_period_is_the_month_at_construction() {
    let server = common::setup_server();
    let _login = common::mock_successful_login(&server);

    let before = HistoryPeriod::current();
    let client = common::builder_for(&server)
        .login(common::credentials())
        .await
        .unwrap();
    let after = HistoryPeriod::current();

    assert!(client.period() == before || client.period() == after);
    let query: Vec<(String, String)> = client
        .history_url()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        query,
        vec![
            ("user_id".to_string(), String::new()),
            ("month".to_string(), client.period().month().to_string()),
            ("year".to_string(), client.period().year().to_string()),
        ]
    );
}

#[tokio::test]
async fn period_stays_fixed_for_every_history_call() {
    let server = common::setup_server();
    let _login = common::mock_successful_login(&server);
    // A session opened on the last day of a month keeps asking for that month.
    let period = HistoryPeriod::containing(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    let history = common::mock_history(&server, period, "{\"requests\": []}".into());

    let client = common::builder_for(&server)
        .history_period(period)
        .login(common::credentials())
        .await
        .unwrap();
    client.get_history().await.unwrap();
    client.get_history().await.unwrap();

    history.assert_calls(2);
    assert!(client.history_url().as_str().ends_with(
        "/dashboard/filter_requests/?user_id=&month=12&year=2025"
    ));
}
