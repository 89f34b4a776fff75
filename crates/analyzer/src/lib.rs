use configuration::{DisplayConfig, TrendConfig};
use core_types::{DailyRecord, Direction, TrendKind, percent_change, round2, to_fixed};

pub mod report;
pub mod streaks;
pub mod yearly;

pub use report::{TrendEvent, TrendReport, YearlyPerformance};
pub use streaks::{LongestRuns, Run, longest_runs};
pub use yearly::yearly_performance;

/// The trend analysis engine.
///
/// Finds per-year performance, the longest rising and falling runs, and large
/// moves over a trailing window. Insufficient data is never an error: an
/// empty input produces an empty report.
pub struct TrendAnalyzer {
    config: TrendConfig,
    subject: String,
}

impl TrendAnalyzer {
    pub fn new(config: TrendConfig, display: &DisplayConfig) -> Self {
        Self {
            config,
            subject: display.subject.clone(),
        }
    }

    /// Sorts a copy of `records` by trading day and analyses it.
    ///
    /// The sort is stable, so records sharing a day keep their relative order.
    pub fn analyze(&self, records: &[DailyRecord]) -> TrendReport {
        if records.is_empty() {
            return TrendReport::default();
        }

        let mut sorted = records.to_vec();
        sorted.sort_by_key(|r| r.trading_day);

        let yearly_performance = yearly_performance(&sorted);

        let mut trends = vec![self.overall_trend(&sorted)];
        let runs = longest_runs(&sorted);
        if let Some(event) = self.run_trend(&sorted, runs.bullish, Direction::Bullish) {
            trends.push(event);
        }
        if let Some(event) = self.run_trend(&sorted, runs.bearish, Direction::Bearish) {
            trends.push(event);
        }

        let key_events = self.significant_moves(&sorted);

        tracing::debug!(
            years = yearly_performance.len(),
            trends = trends.len(),
            key_events = key_events.len(),
            longest_bullish = runs.bullish.len,
            longest_bearish = runs.bearish.len,
            "Trend analysis complete"
        );

        TrendReport {
            yearly_performance,
            trends,
            key_events,
            longest_bullish_run: runs.bullish.len,
            longest_bearish_run: runs.bearish.len,
        }
    }

    /// The trend over the whole span, first close to last close.
    fn overall_trend(&self, sorted: &[DailyRecord]) -> TrendEvent {
        let (first, last) = (&sorted[0], &sorted[sorted.len() - 1]);
        let direction = Direction::from_change(last.close - first.close);
        let performance = percent_change(first.close, last.close).ok();

        let description = match performance {
            Some(pct) => format!(
                "{} stock {} by {}% over the entire period",
                self.subject,
                if direction == Direction::Bullish { "increased" } else { "decreased" },
                to_fixed(pct.abs(), 2)
            ),
            None => format!(
                "{} stock moved from ${} to ${} over the entire period",
                self.subject,
                to_fixed(first.close, 2),
                to_fixed(last.close, 2)
            ),
        };

        TrendEvent {
            kind: TrendKind::Overall,
            direction,
            period_start: first.date.clone(),
            period_end: last.date.clone(),
            magnitude_pct: performance.map(round2),
            length: Some(sorted.len()),
            description,
        }
    }

    /// Reports a longest run once it is longer than `min_run_length`.
    fn run_trend(
        &self,
        sorted: &[DailyRecord],
        run: Run,
        direction: Direction,
    ) -> Option<TrendEvent> {
        if run.len <= self.config.min_run_length {
            return None;
        }

        let (first, last) = (&sorted[run.start], &sorted[run.end()]);
        let performance = percent_change(first.close, last.close).ok();
        let magnitude = performance
            .map(|p| format!("{}%", to_fixed(p.abs(), 2)))
            .unwrap_or_else(|| "an undefined".to_string());

        let (kind, description) = match direction {
            Direction::Bullish => (
                TrendKind::BullishRun,
                format!(
                    "Longest bullish trend lasted {} trading days with {} gain",
                    run.len, magnitude
                ),
            ),
            Direction::Bearish => (
                TrendKind::BearishRun,
                format!(
                    "Longest bearish trend lasted {} trading days with {} loss",
                    run.len, magnitude
                ),
            ),
        };

        Some(TrendEvent {
            kind,
            direction,
            period_start: first.date.clone(),
            period_end: last.date.clone(),
            magnitude_pct: performance.map(round2),
            length: Some(run.len),
            description,
        })
    }

    /// Greedy, non-overlapping scan for moves of at least `move_threshold_pct`
    /// over `move_window` sessions. After a hit the scan skips past the whole
    /// window so the same move is not reported twice.
    fn significant_moves(&self, sorted: &[DailyRecord]) -> Vec<TrendEvent> {
        let window = self.config.move_window;
        let mut events = Vec::new();

        let mut i = window;
        while i < sorted.len() {
            let (base, current) = (&sorted[i - window], &sorted[i]);

            match percent_change(base.close, current.close) {
                Ok(change) if change.abs() >= self.config.move_threshold_pct => {
                    let direction = Direction::from_change(change);
                    events.push(TrendEvent {
                        kind: TrendKind::SignificantMove,
                        direction,
                        period_start: base.date.clone(),
                        period_end: current.date.clone(),
                        magnitude_pct: Some(round2(change)),
                        length: Some(window),
                        description: format!(
                            "{}% {} in stock price",
                            to_fixed(change.abs(), 2),
                            if direction == Direction::Bullish { "increase" } else { "decrease" }
                        ),
                    });
                    i += window;
                }
                Ok(_) => {}
                Err(_) => {
                    tracing::debug!(
                        date = %base.date,
                        "Skipping move window with an undefined change"
                    );
                }
            }
            i += 1;
        }

        events
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new(TrendConfig::default(), &DisplayConfig::default())
    }
}

/// Shorthand for `TrendAnalyzer::default().analyze(records)`.
pub fn analyze_trends(records: &[DailyRecord]) -> TrendReport {
    TrendAnalyzer::default().analyze(records)
}
