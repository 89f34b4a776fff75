use core_types::DailyRecord;

/// A contiguous span of record indices, `start..start + len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

impl Run {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the last record in the run. Only meaningful when non-empty.
    pub fn end(&self) -> usize {
        self.start + self.len.saturating_sub(1)
    }

    fn push(&mut self, index: usize) {
        if self.len == 0 {
            self.start = index;
        }
        self.len += 1;
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}

/// The longest bullish and bearish runs of a sorted sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongestRuns {
    pub bullish: Run,
    pub bearish: Run,
}

/// Finds the longest runs of rising and falling closes.
///
/// Day `i` is up when `close[i] > close[i-1]` and down when it is lower. Each
/// run holds the days that moved, not the day it started from, so a run can be
/// at most `len - 1` long. An unchanged close extends whichever run is active
/// without resetting it, and extends nothing when no run is active. The
/// longest runs are captured when a directional day grows a run, so trailing
/// unchanged days only count once the run moves again.
pub fn longest_runs(records: &[DailyRecord]) -> LongestRuns {
    let mut bullish = Run::default();
    let mut bearish = Run::default();
    let mut longest = LongestRuns::default();

    for i in 1..records.len() {
        let (prev, curr) = (records[i - 1].close, records[i].close);

        if curr > prev {
            bullish.push(i);
            bearish.clear();
            if bullish.len > longest.bullish.len {
                longest.bullish = bullish;
            }
        } else if curr < prev {
            bearish.push(i);
            bullish.clear();
            if bearish.len > longest.bearish.len {
                longest.bearish = bearish;
            }
        } else if !bullish.is_empty() {
            bullish.push(i);
        } else if !bearish.is_empty() {
            bearish.push(i);
        }
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use rust_decimal::Decimal;

    fn series(closes: &[i64]) -> Vec<DailyRecord> {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let day = base + Days::new(i as u64);
                let c = Decimal::from(*c);
                DailyRecord::new(day.to_string(), day, c, c, c, c, None, 100)
            })
            .collect()
    }

    #[test]
    fn strictly_rising_series_is_one_run_of_pairs() {
        let closes: Vec<i64> = (1..=25).collect();
        let runs = longest_runs(&series(&closes));
        assert_eq!(runs.bullish, Run { start: 1, len: 24 });
        assert!(runs.bearish.is_empty());
    }

    #[test]
    fn unchanged_close_extends_active_run() {
        // up, flat, up -> one bullish run of three days
        let runs = longest_runs(&series(&[1, 2, 2, 3]));
        assert_eq!(runs.bullish, Run { start: 1, len: 3 });
    }

    #[test]
    fn unchanged_close_with_no_active_run_extends_nothing() {
        let runs = longest_runs(&series(&[5, 5, 5, 6]));
        assert_eq!(runs.bullish, Run { start: 3, len: 1 });
    }

    #[test]
    fn trailing_flat_days_are_not_captured_without_another_move() {
        let runs = longest_runs(&series(&[1, 2, 3, 3, 3]));
        assert_eq!(runs.bullish, Run { start: 1, len: 2 });
    }

    #[test]
    fn opposite_move_resets_the_run() {
        let runs = longest_runs(&series(&[1, 2, 3, 2, 1, 0, 1]));
        assert_eq!(runs.bullish, Run { start: 1, len: 2 });
        assert_eq!(runs.bearish, Run { start: 3, len: 3 });
        assert!(runs.bullish.end() < runs.bearish.start);
    }

    #[test]
    fn short_inputs_have_no_runs() {
        assert_eq!(longest_runs(&[]), LongestRuns::default());
        assert_eq!(longest_runs(&series(&[7])), LongestRuns::default());
    }
}
