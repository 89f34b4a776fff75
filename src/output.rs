use analytics::MetricsSummary;
use analyzer::{TrendEvent, TrendReport, YearlyPerformance};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use core_types::{TimeWindow, format_large_number, to_fixed};
use insights::Insight;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// Everything the `analyze` command shows for one window.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub subject: String,
    pub window: TimeWindow,
    pub records: usize,
    pub metrics: Option<MetricsSummary>,
    pub trends: TrendReport,
    pub insights: Vec<Insight>,
}

/// One row of the `compare` command.
#[derive(Debug, Serialize)]
pub struct WindowMetrics {
    pub window: TimeWindow,
    pub records: usize,
    pub metrics: Option<MetricsSummary>,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn pct(value: Option<Decimal>) -> String {
    value
        .map(|v| format!("{}%", to_fixed(v, 2)))
        .unwrap_or_else(|| "undefined".to_string())
}

pub fn print_analysis(analysis: &Analysis) {
    println!(
        "{} | {} | {} trading days\n",
        analysis.subject,
        analysis.window.label(),
        analysis.records
    );

    match &analysis.metrics {
        Some(metrics) => println!("{}\n", metrics_table(metrics)),
        None => println!("No metrics available.\n"),
    }

    let trends = &analysis.trends;
    if !trends.yearly_performance.is_empty() {
        println!("Yearly Performance\n{}\n", yearly_table(&trends.yearly_performance));
    }
    if !trends.trends.is_empty() {
        println!("Key Trends\n{}\n", trends_table(&trends.trends));
    }
    if !trends.key_events.is_empty() {
        println!("Significant Price Movements\n{}\n", events_table(&trends.key_events));
    }

    if !analysis.insights.is_empty() {
        println!("Insights");
        for insight in &analysis.insights {
            println!("  * {}: {}", insight.title, insight.text);
        }
    }
}

fn metrics_table(metrics: &MetricsSummary) -> Table {
    let mut table = new_table(vec!["Metric", "Value", "Description"]);
    table.add_row(vec![
        "Maximum Price".to_string(),
        metrics.max_price_display(),
        "Highest recorded stock price".to_string(),
    ]);
    table.add_row(vec![
        "Minimum Price".to_string(),
        metrics.min_price_display(),
        "Lowest recorded stock price".to_string(),
    ]);
    table.add_row(vec![
        "Average Volume".to_string(),
        metrics.average_volume_display.clone(),
        "Average daily trading volume".to_string(),
    ]);
    table.add_row(vec![
        "Price Change".to_string(),
        metrics.price_increase_display(),
        "Overall price change percentage".to_string(),
    ]);
    table.add_row(vec![
        "Volatility".to_string(),
        metrics.volatility_display(),
        "Standard deviation of price changes".to_string(),
    ]);
    table
}

fn yearly_table(years: &[YearlyPerformance]) -> Table {
    let mut table = new_table(vec![
        "Year", "Days", "Start", "End", "Performance", "Avg Volume", "Volatility",
    ]);
    for year in years {
        let volume = year
            .average_volume
            .round()
            .to_u64()
            .map(format_large_number)
            .unwrap_or_else(|| year.average_volume.to_string());
        table.add_row(vec![
            year.year.to_string(),
            year.trading_days.to_string(),
            format!("${}", to_fixed(year.start_price, 2)),
            format!("${}", to_fixed(year.end_price, 2)),
            pct(year.performance_pct),
            volume,
            year.volatility.map(|v| to_fixed(v, 2)).unwrap_or_else(|| "undefined".to_string()),
        ]);
    }
    table
}

fn trends_table(trends: &[TrendEvent]) -> Table {
    let mut table = new_table(vec!["Period", "Trend", "Performance", "Description"]);
    for trend in trends {
        table.add_row(vec![
            format!("{} to {}", trend.period_start, trend.period_end),
            trend.direction.to_string(),
            pct(trend.magnitude_pct),
            trend.description.clone(),
        ]);
    }
    table
}

fn events_table(events: &[TrendEvent]) -> Table {
    let mut table = new_table(vec!["Date", "Change", "Description"]);
    for event in events {
        table.add_row(vec![
            event.date().to_string(),
            pct(event.magnitude_pct),
            event.description.clone(),
        ]);
    }
    table
}

pub fn print_comparison(rows: &[WindowMetrics]) {
    let mut table = new_table(vec![
        "Window", "Days", "Max Price", "Min Price", "Avg Volume", "Price Change", "Volatility",
    ]);
    for row in rows {
        let cells = match &row.metrics {
            Some(m) => vec![
                m.max_price_display(),
                m.min_price_display(),
                m.average_volume_display.clone(),
                m.price_increase_display(),
                m.volatility_display(),
            ],
            None => vec!["-".to_string(); 5],
        };
        let mut line = vec![row.window.label().to_string(), row.records.to_string()];
        line.extend(cells);
        table.add_row(line);
    }
    println!("{table}");
}
