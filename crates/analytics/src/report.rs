use core_types::to_fixed;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A snapshot of descriptive statistics over a record sequence.
///
/// Prices and percentages are already rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub record_count: usize,

    // I. Price extremes (over `high` and `low`)
    pub max_price: Decimal,
    pub min_price: Decimal,

    // II. Volume
    /// Mean daily volume rounded to the nearest share.
    pub average_volume: u64,
    /// `average_volume` in its short form, e.g. "117.3M".
    pub average_volume_display: String,

    // III. Return and risk
    /// First close to last close; `None` if the first close is zero.
    pub price_increase_pct: Option<Decimal>,
    /// Population std-dev of the absolute daily percent changes; `None` if no
    /// record has a defined percent change.
    pub volatility: Option<Decimal>,
}

impl MetricsSummary {
    pub fn max_price_display(&self) -> String {
        format!("${}", to_fixed(self.max_price, 2))
    }

    pub fn min_price_display(&self) -> String {
        format!("${}", to_fixed(self.min_price, 2))
    }

    pub fn price_increase_display(&self) -> String {
        match self.price_increase_pct {
            Some(pct) => format!("{}%", to_fixed(pct, 2)),
            None => "undefined".to_string(),
        }
    }

    pub fn volatility_display(&self) -> String {
        self.volatility
            .map(|v| to_fixed(v, 2))
            .unwrap_or_else(|| "undefined".to_string())
    }
}
