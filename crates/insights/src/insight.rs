use serde::{Deserialize, Serialize};

/// The kinds of observation the generator can make. Each appears at most once
/// per call, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightKind {
    UnusualVolume,
    SignificantMovement,
    BullishStreak,
    BearishStreak,
    OverallPerformance,
}

impl InsightKind {
    pub fn title(&self) -> &'static str {
        match self {
            InsightKind::UnusualVolume => "Unusual Trading Volume",
            InsightKind::SignificantMovement => "Significant Price Movement",
            InsightKind::BullishStreak => "Bullish Trend Detected",
            InsightKind::BearishStreak => "Bearish Trend Detected",
            InsightKind::OverallPerformance => "Overall Performance",
        }
    }
}

/// A titled, human-readable observation about a record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub text: String,
}

impl Insight {
    pub fn new(kind: InsightKind, text: String) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            text,
        }
    }
}
