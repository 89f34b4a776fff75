use crate::ratio::percent_change;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Date layouts accepted for the `Date` column, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parses a trading day from its textual form.
pub fn parse_trading_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// One trading day of OHLCV data together with its intraday change.
///
/// Records are built once through [`DailyRecord::new`], which derives `change`
/// and `percent_change`, and are treated as immutable values afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The date exactly as it appeared in the source.
    pub date: String,
    /// The calendar day `date` refers to; used for sorting and grouping.
    pub trading_day: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub adj_close: Option<Decimal>,
    pub volume: u64,
    /// `close - open`.
    pub change: Decimal,
    /// `change / open * 100`; `None` when `open` is zero.
    pub percent_change: Option<Decimal>,
}

impl DailyRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: impl Into<String>,
        trading_day: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        adj_close: Option<Decimal>,
        volume: u64,
    ) -> Self {
        let change = close - open;
        let percent_change = percent_change(open, close).ok();
        Self {
            date: date.into(),
            trading_day,
            open,
            high,
            low,
            close,
            adj_close,
            volume,
            change,
            percent_change,
        }
    }
}
