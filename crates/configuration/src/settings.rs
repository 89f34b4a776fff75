use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplayConfig,
    pub trends: TrendConfig,
    pub insights: InsightConfig,
}

/// How analysed instruments are named in generated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// The name used in narrative text, e.g. "AAPL stock increased by ...".
    pub subject: String,
}

/// Parameters for trend and key-event detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// A longest run is reported only when it is strictly longer than this
    /// many trading days (roughly one trading month).
    pub min_run_length: usize,
    /// The trailing window, in sessions, over which significant moves are measured.
    pub move_window: usize,
    /// Absolute percent change over `move_window` that counts as significant.
    pub move_threshold_pct: Decimal,
}

/// Parameters for insight generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Below this many records no insights are produced.
    pub min_records: usize,
    /// Peak volume must exceed the average by this factor to be unusual.
    pub volume_multiple: Decimal,
    /// Daily absolute percent change above which a day is significant.
    pub daily_move_threshold_pct: Decimal,
    /// Consecutive up (or down) closes required for a streak insight, exclusive.
    pub min_streak: usize,
}

// --- Default Implementations ---
// This allows a user to omit any section from their toml
// and still have it work with sensible defaults.

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            subject: "AAPL".to_string(),
        }
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_run_length: 20,
            move_window: 20,
            move_threshold_pct: dec!(10),
        }
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            min_records: 30,
            volume_multiple: dec!(3),
            daily_move_threshold_pct: dec!(5),
            min_streak: 5,
        }
    }
}
