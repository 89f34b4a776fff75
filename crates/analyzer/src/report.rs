use core_types::{Direction, TrendKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Performance of a single calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyPerformance {
    pub year: i32,
    pub trading_days: usize,
    /// First close of the year.
    pub start_price: Decimal,
    /// Last close of the year.
    pub end_price: Decimal,
    pub performance_pct: Option<Decimal>,
    pub average_volume: Decimal,
    /// Population std-dev of the signed daily percent changes.
    pub volatility: Option<Decimal>,
}

/// A detected streak, key movement, or the overall trend of the span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEvent {
    pub kind: TrendKind,
    pub direction: Direction,
    /// For significant moves this is the start of the trailing window.
    pub period_start: String,
    /// For significant moves this is the date the move was detected on.
    pub period_end: String,
    pub magnitude_pct: Option<Decimal>,
    /// Trading days in a run, or sessions in a move window.
    pub length: Option<usize>,
    pub description: String,
}

impl TrendEvent {
    /// The single date a key event is reported on.
    pub fn date(&self) -> &str {
        &self.period_end
    }
}

/// Everything the trend analyzer derives from one sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub yearly_performance: Vec<YearlyPerformance>,
    pub trends: Vec<TrendEvent>,
    pub key_events: Vec<TrendEvent>,
    pub longest_bullish_run: usize,
    pub longest_bearish_run: usize,
}
