use analyzer::analyze_trends;
use chrono::{Days, NaiveDate};
use core_types::{Direction, TrendKind};
use insights::{InsightKind, generate_insights};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Sixty sessions of a steady rally with one heavy-volume day.
fn rally_csv() -> String {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    let mut csv = String::from("Date,Open,High,Low,Close,Adj Close,Volume\n");
    for i in 0..60u64 {
        let date = start + Days::new(i);
        let close = Decimal::from(100 + i);
        let open = close - dec!(0.5);
        let volume = if i == 30 { 9_000_000 } else { 1_000_000 };
        csv.push_str(&format!(
            "{date},{open},{},{},{close},{close},{volume}\n",
            close + dec!(1),
            open - dec!(1)
        ));
    }
    csv
}

#[test]
fn csv_to_insights() {
    let records = parser::parse(&rally_csv()).unwrap();
    assert_eq!(records.len(), 60);
    assert_eq!(records[0].date, "2019-01-01");
    assert_eq!(records[59].date, "2019-03-01");

    let metrics = analytics::compute_metrics(&records).unwrap();
    assert_eq!(metrics.max_price, dec!(160));
    assert_eq!(metrics.min_price, dec!(98.5));
    assert_eq!(metrics.price_increase_pct, Some(dec!(59)));
    assert_eq!(metrics.average_volume, 1_133_333);
    assert_eq!(metrics.average_volume_display, "1.1M");

    let trends = analyze_trends(&records);
    assert_eq!(trends.trends[0].kind, TrendKind::Overall);
    assert_eq!(trends.trends[0].direction, Direction::Bullish);
    assert_eq!(trends.longest_bullish_run, 59);
    assert!(trends.trends.iter().any(|t| t.kind == TrendKind::BullishRun));
    let event_dates: Vec<_> = trends.key_events.iter().map(|e| e.date()).collect();
    assert_eq!(event_dates, vec!["2019-01-21", "2019-02-11"]);
    assert_eq!(trends.yearly_performance.len(), 1);

    let insights = generate_insights(&records);
    let kinds: Vec<_> = insights.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            InsightKind::UnusualVolume,
            InsightKind::BullishStreak,
            InsightKind::OverallPerformance,
        ]
    );
    assert!(insights[0].text.contains("9.0M shares traded, which is 8 times"));
}

#[test]
fn reordered_source_gives_same_trends_but_reversed_metrics() {
    let mut records = parser::parse(&rally_csv()).unwrap();
    records.reverse();

    // The analyzer sorts its own copy.
    let trends = analyze_trends(&records);
    assert_eq!(trends.trends[0].direction, Direction::Bullish);
    assert_eq!(trends.trends[0].magnitude_pct, Some(dec!(59)));

    // Metrics take the sequence as given: last close is now the lowest.
    let metrics = analytics::compute_metrics(&records).unwrap();
    assert_eq!(metrics.price_increase_pct, Some(dec!(-37.11)));
}

#[test]
fn header_only_csv_flows_through_as_absent_sections() {
    let records = parser::parse("Date,Open,High,Low,Close,Adj Close,Volume\n").unwrap();

    assert_eq!(
        analytics::compute_metrics(&records),
        Err(analytics::AnalyticsError::EmptyInput)
    );
    assert_eq!(analyze_trends(&records), analyzer::TrendReport::default());
    assert!(generate_insights(&records).is_empty());
}
