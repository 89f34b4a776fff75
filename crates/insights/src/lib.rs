//! # Stocklens Insights
//!
//! Turns a record sequence into short narrative observations: unusual
//! volume, large daily moves, rising or falling streaks, and the overall
//! change across the sequence.
//!
//! Records are read in the order given. Sequences shorter than
//! `InsightConfig::min_records` produce no insights at all.

use configuration::{DisplayConfig, InsightConfig};
use core_types::{DailyRecord, format_large_number, percent_change, round2, to_fixed};
use rust_decimal::prelude::*;

pub mod insight;

pub use insight::{Insight, InsightKind};

/// Longest runs of strictly rising and strictly falling closes.
///
/// Unlike the trend analyzer's runs, an unchanged close ends both streaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streaks {
    pub longest_up: usize,
    pub longest_down: usize,
}

pub fn streaks(records: &[DailyRecord]) -> Streaks {
    let mut longest = Streaks::default();
    let (mut up, mut down) = (0usize, 0usize);

    for pair in records.windows(2) {
        let (prev, curr) = (pair[0].close, pair[1].close);
        if curr > prev {
            up += 1;
            down = 0;
            longest.longest_up = longest.longest_up.max(up);
        } else if curr < prev {
            down += 1;
            up = 0;
            longest.longest_down = longest.longest_down.max(down);
        } else {
            up = 0;
            down = 0;
        }
    }

    longest
}

/// Generates insights for one view of the data.
pub struct InsightGenerator {
    config: InsightConfig,
    subject: String,
}

impl InsightGenerator {
    pub fn new(config: InsightConfig, display: &DisplayConfig) -> Self {
        Self {
            config,
            subject: display.subject.clone(),
        }
    }

    pub fn generate(&self, records: &[DailyRecord]) -> Vec<Insight> {
        if records.len() < self.config.min_records {
            tracing::debug!(
                records = records.len(),
                required = self.config.min_records,
                "Too few records for insights"
            );
            return Vec::new();
        }

        let streaks = streaks(records);
        let mut insights = Vec::new();

        insights.extend(self.unusual_volume(records));
        insights.extend(self.significant_movement(records));
        if streaks.longest_up > self.config.min_streak {
            insights.push(Insight::new(
                InsightKind::BullishStreak,
                format!(
                    "Detected a bullish trend of {} consecutive days of price increases.",
                    streaks.longest_up
                ),
            ));
        }
        if streaks.longest_down > self.config.min_streak {
            insights.push(Insight::new(
                InsightKind::BearishStreak,
                format!(
                    "Detected a bearish trend of {} consecutive days of price decreases.",
                    streaks.longest_down
                ),
            ));
        }
        insights.extend(self.overall_performance(records));

        tracing::debug!(insights = insights.len(), "Generated insights");
        insights
    }

    fn unusual_volume(&self, records: &[DailyRecord]) -> Option<Insight> {
        let peak = records
            .iter()
            .reduce(|max, r| if r.volume > max.volume { r } else { max })?;

        let total: Decimal = records.iter().map(|r| Decimal::from(r.volume)).sum();
        let average = total / Decimal::from(records.len());

        if Decimal::from(peak.volume) <= average * self.config.volume_multiple {
            return None;
        }

        // A peak above a positive multiple of the average implies the average is non-zero.
        let multiple = (Decimal::from(peak.volume) / average)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        Some(Insight::new(
            InsightKind::UnusualVolume,
            format!(
                "Unusually high trading volume detected on {} with {} shares traded, which is {} times the average daily volume.",
                peak.date,
                format_large_number(peak.volume),
                multiple
            ),
        ))
    }

    fn significant_movement(&self, records: &[DailyRecord]) -> Option<Insight> {
        let threshold = self.config.daily_move_threshold_pct;
        let significant: Vec<(&DailyRecord, Decimal)> = records
            .iter()
            .filter_map(|r| r.percent_change.map(|pct| (r, pct)))
            .filter(|(_, pct)| pct.abs() > threshold)
            .collect();

        let (most, most_pct) = significant
            .iter()
            .copied()
            .reduce(|max, cur| if cur.1.abs() > max.1.abs() { cur } else { max })?;

        Some(Insight::new(
            InsightKind::SignificantMovement,
            format!(
                "{} day(s) had price movements exceeding {}%. Most significant was on {} with a {}% change.",
                significant.len(),
                threshold.normalize(),
                most.date,
                to_fixed(most_pct, 2)
            ),
        ))
    }

    fn overall_performance(&self, records: &[DailyRecord]) -> Option<Insight> {
        let (first, last) = (records.first()?, records.last()?);
        let from = to_fixed(first.close, 2);
        let to = to_fixed(last.close, 2);

        let text = match percent_change(first.close, last.close) {
            Ok(pct) => {
                let pct = round2(pct);
                let direction = if pct > Decimal::ZERO { "increased" } else { "decreased" };
                format!(
                    "Over the selected period, {}'s stock price {} by {}%, from ${} to ${}.",
                    self.subject,
                    direction,
                    pct.abs().normalize(),
                    from,
                    to
                )
            }
            Err(_) => format!(
                "Over the selected period, {}'s stock price moved from ${} to ${}.",
                self.subject, from, to
            ),
        };

        Some(Insight::new(InsightKind::OverallPerformance, text))
    }
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new(InsightConfig::default(), &DisplayConfig::default())
    }
}

/// Shorthand for `InsightGenerator::default().generate(records)`.
pub fn generate_insights(records: &[DailyRecord]) -> Vec<Insight> {
    InsightGenerator::default().generate(records)
}
