use crate::error::CoreError;
use crate::structs::DailyRecord;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The direction of a price movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Bullish,
    Bearish,
}

impl Direction {
    /// Bullish for a non-negative change, bearish otherwise.
    pub fn from_change(change: rust_decimal::Decimal) -> Self {
        if change.is_sign_negative() && !change.is_zero() {
            Direction::Bearish
        } else {
            Direction::Bullish
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Bullish => write!(f, "bullish"),
            Direction::Bearish => write!(f, "bearish"),
        }
    }
}

/// What a `TrendEvent` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendKind {
    /// The whole analysed span, first close to last close.
    Overall,
    BullishRun,
    BearishRun,
    /// A large move in closing price over a trailing window of sessions.
    SignificantMove,
}

impl fmt::Display for TrendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendKind::Overall => "overall",
            TrendKind::BullishRun => "bullish-run",
            TrendKind::BearishRun => "bearish-run",
            TrendKind::SignificantMove => "significant-move",
        };
        f.write_str(label)
    }
}

/// A look-back window measured from the latest trading day in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TimeWindow {
    #[default]
    #[serde(rename = "all")]
    #[cfg_attr(feature = "clap", value(name = "all"))]
    All,
    #[serde(rename = "1y")]
    #[cfg_attr(feature = "clap", value(name = "1y"))]
    OneYear,
    #[serde(rename = "3y")]
    #[cfg_attr(feature = "clap", value(name = "3y"))]
    ThreeYears,
    #[serde(rename = "5y")]
    #[cfg_attr(feature = "clap", value(name = "5y"))]
    FiveYears,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::All,
        TimeWindow::FiveYears,
        TimeWindow::ThreeYears,
        TimeWindow::OneYear,
    ];

    /// Number of calendar years covered, or `None` for the unbounded window.
    pub fn years(&self) -> Option<u32> {
        match self {
            TimeWindow::All => None,
            TimeWindow::OneYear => Some(1),
            TimeWindow::ThreeYears => Some(3),
            TimeWindow::FiveYears => Some(5),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::All => "All Time",
            TimeWindow::OneYear => "1 Year",
            TimeWindow::ThreeYears => "3 Years",
            TimeWindow::FiveYears => "5 Years",
        }
    }

    /// The earliest trading day kept when the latest day is `latest`.
    ///
    /// A Feb 29 anchor rolls over to Mar 1 when the target year has no leap day.
    pub fn cutoff(&self, latest: NaiveDate) -> Option<NaiveDate> {
        let year = latest.year() - self.years()? as i32;
        NaiveDate::from_ymd_opt(year, latest.month(), latest.day()).or_else(|| {
            NaiveDate::from_ymd_opt(year, latest.month(), latest.day() - 1)?.succ_opt()
        })
    }

    /// Keeps the records on or after the cutoff, in their original order.
    pub fn apply(&self, records: &[DailyRecord]) -> Vec<DailyRecord> {
        let Some(latest) = records.iter().map(|r| r.trading_day).max() else {
            return Vec::new();
        };
        match self.cutoff(latest) {
            Some(cutoff) => records
                .iter()
                .filter(|r| r.trading_day >= cutoff)
                .cloned()
                .collect(),
            None => records.to_vec(),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            TimeWindow::All => "all",
            TimeWindow::OneYear => "1y",
            TimeWindow::ThreeYears => "3y",
            TimeWindow::FiveYears => "5y",
        };
        f.write_str(id)
    }
}

impl FromStr for TimeWindow {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TimeWindow::All),
            "1y" => Ok(TimeWindow::OneYear),
            "3y" => Ok(TimeWindow::ThreeYears),
            "5y" => Ok(TimeWindow::FiveYears),
            other => Err(CoreError::InvalidInput(
                "time window".to_string(),
                format!("expected one of all, 1y, 3y, 5y but got '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(date: &str) -> DailyRecord {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        DailyRecord::new(date, day, dec!(10), dec!(11), dec!(9), dec!(10), None, 100)
    }

    #[test]
    fn parses_selector_ids() {
        assert_eq!("all".parse::<TimeWindow>().unwrap(), TimeWindow::All);
        assert_eq!("3Y".parse::<TimeWindow>().unwrap(), TimeWindow::ThreeYears);
        assert!("2y".parse::<TimeWindow>().is_err());
    }

    #[test]
    fn one_year_window_is_measured_from_latest_day() {
        let records = vec![
            record("2018-06-01"),
            record("2019-06-14"),
            record("2019-06-15"),
            record("2020-06-15"),
        ];
        let filtered = TimeWindow::OneYear.apply(&records);
        let dates: Vec<_> = filtered.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2019-06-15", "2020-06-15"]);
    }

    #[test]
    fn all_window_keeps_everything() {
        let records = vec![record("1980-12-12"), record("1985-01-02")];
        assert_eq!(TimeWindow::All.apply(&records), records);
    }

    #[test]
    fn leap_day_cutoff_rolls_over_to_march() {
        let latest = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(
            TimeWindow::OneYear.cutoff(latest),
            NaiveDate::from_ymd_opt(2019, 3, 1)
        );

        let records = vec![record("2019-02-28"), record("2019-03-01"), record("2020-02-29")];
        let dates: Vec<_> = TimeWindow::OneYear
            .apply(&records)
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec!["2019-03-01", "2020-02-29"]);
    }

    #[test]
    fn non_leap_anchor_keeps_same_calendar_day() {
        let latest = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
        assert_eq!(
            TimeWindow::FiveYears.cutoff(latest),
            NaiveDate::from_ymd_opt(2016, 3, 15)
        );
    }

    #[test]
    fn empty_input_yields_empty_window() {
        assert!(TimeWindow::FiveYears.apply(&[]).is_empty());
    }
}
