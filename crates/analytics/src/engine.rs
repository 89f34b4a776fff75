use crate::error::AnalyticsError;
use crate::report::MetricsSummary;
use core_types::{DailyRecord, format_large_number, percent_change, population_std_dev, round2};
use rust_decimal::prelude::*;

/// A stateless calculator for deriving summary metrics from daily records.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating summary metrics.
    ///
    /// # Arguments
    ///
    /// * `records` - Daily records in chronological order. The overall return is
    ///   measured from the first record's close to the last record's close.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `MetricsSummary`, or `AnalyticsError::EmptyInput`
    /// when there is nothing to summarize.
    pub fn calculate(&self, records: &[DailyRecord]) -> Result<MetricsSummary, AnalyticsError> {
        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Err(AnalyticsError::EmptyInput);
        };

        let mut max_price = first.high;
        let mut min_price = first.low;
        let mut total_volume = Decimal::ZERO;
        let mut abs_changes = Vec::with_capacity(records.len());

        for record in records {
            if record.high > max_price {
                max_price = record.high;
            }
            if record.low < min_price {
                min_price = record.low;
            }
            total_volume += Decimal::from(record.volume);

            if let Some(pct) = record.percent_change {
                abs_changes.push(pct.abs());
            }
        }

        let average_volume = (total_volume / Decimal::from(records.len()))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .ok_or_else(|| {
                AnalyticsError::InternalError("average volume out of range".to_string())
            })?;

        let price_increase_pct = match percent_change(first.close, last.close) {
            Ok(pct) => Some(round2(pct)),
            Err(_) => {
                tracing::warn!(date = %first.date, "Overall return is undefined");
                None
            }
        };

        let volatility = if abs_changes.is_empty() {
            tracing::warn!("No record has a defined percent change; volatility is undefined");
            None
        } else {
            match population_std_dev(&abs_changes) {
                Ok(std_dev) => Some(round2(std_dev)),
                Err(e) => {
                    tracing::warn!(error = %e, "Volatility is undefined");
                    None
                }
            }
        };

        tracing::debug!(
            records = records.len(),
            excluded = records.len() - abs_changes.len(),
            "Computed metrics summary"
        );

        Ok(MetricsSummary {
            record_count: records.len(),
            max_price: round2(max_price),
            min_price: round2(min_price),
            average_volume,
            average_volume_display: format_large_number(average_volume),
            price_increase_pct,
            volatility,
        })
    }
}

/// Shorthand for `MetricsEngine::new().calculate(records)`.
pub fn compute_metrics(records: &[DailyRecord]) -> Result<MetricsSummary, AnalyticsError> {
    MetricsEngine::new().calculate(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(
        day: u32,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> DailyRecord {
        let date = NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
        DailyRecord::new(date.to_string(), date, open, high, low, close, None, volume)
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(compute_metrics(&[]), Err(AnalyticsError::EmptyInput));
    }

    #[test]
    fn overall_return_is_first_close_to_last_close() {
        let records = vec![
            record(1, dec!(100), dec!(101), dec!(99), dec!(100), 1_000),
            record(2, dec!(105), dec!(112), dec!(104), dec!(110), 2_000),
            record(3, dec!(108), dec!(109), dec!(88.555), dec!(90), 3_500),
        ];
        let summary = compute_metrics(&records).unwrap();

        assert_eq!(summary.price_increase_pct, Some(dec!(-10.00)));
        assert_eq!(summary.price_increase_display(), "-10.00%");
        assert_eq!(summary.max_price, dec!(112));
        assert_eq!(summary.min_price, dec!(88.56));
        assert_eq!(summary.average_volume, 2_167);
        assert_eq!(summary.average_volume_display, "2.2K");
        assert!(summary.volatility.unwrap() > Decimal::ZERO);
    }

    #[test]
    fn single_record_has_flat_return() {
        let records = vec![record(1, dec!(10), dec!(12.5), dec!(9.75), dec!(11), 500)];
        let summary = compute_metrics(&records).unwrap();

        assert_eq!(summary.max_price, dec!(12.5));
        assert_eq!(summary.min_price, dec!(9.75));
        assert_eq!(summary.price_increase_pct, Some(Decimal::ZERO));
        assert_eq!(summary.volatility, Some(Decimal::ZERO));
        assert_eq!(summary.average_volume_display, "500");
    }

    #[test]
    fn volatility_uses_absolute_changes() {
        // +5% and -5% days have identical magnitudes, so there is no spread.
        let records = vec![
            record(1, dec!(100), dec!(106), dec!(99), dec!(105), 10),
            record(2, dec!(100), dec!(101), dec!(94), dec!(95), 10),
        ];
        let summary = compute_metrics(&records).unwrap();
        assert_eq!(summary.volatility, Some(Decimal::ZERO));
    }

    #[test]
    fn zero_open_days_are_excluded_from_volatility() {
        let records = vec![
            record(1, dec!(0), dec!(1), dec!(0), dec!(1), 10),
            record(2, dec!(100), dec!(103), dec!(99), dec!(102), 10),
            record(3, dec!(100), dec!(105), dec!(99), dec!(104), 10),
        ];
        // Remaining magnitudes are 2 and 4: mean 3, population std-dev 1.
        let summary = compute_metrics(&records).unwrap();
        assert_eq!(summary.volatility, Some(dec!(1.00)));
    }

    #[test]
    fn all_zero_opens_leave_volatility_undefined() {
        let records = vec![
            record(1, dec!(0), dec!(1), dec!(0), dec!(1), 10),
            record(2, dec!(0), dec!(2), dec!(0), dec!(2), 10),
        ];
        let summary = compute_metrics(&records).unwrap();
        assert_eq!(summary.volatility, None);
        assert_eq!(summary.volatility_display(), "undefined");
    }

    #[test]
    fn zero_first_close_leaves_return_undefined() {
        let records = vec![
            record(1, dec!(1), dec!(1), dec!(0), dec!(0), 10),
            record(2, dec!(1), dec!(2), dec!(1), dec!(2), 10),
        ];
        let summary = compute_metrics(&records).unwrap();
        assert_eq!(summary.price_increase_pct, None);
        assert_eq!(summary.price_increase_display(), "undefined");
    }

    #[test]
    fn extreme_changes_leave_volatility_undefined() {
        let huge = Decimal::from_scientific("7e26").unwrap();
        let records = vec![
            record(1, dec!(1), huge, dec!(1), huge, 10),
            record(2, dec!(100), dec!(100), dec!(100), dec!(100), 10),
        ];
        let summary = compute_metrics(&records).unwrap();
        assert_eq!(summary.max_price, huge);
        assert_eq!(summary.volatility, None);
    }
}
