use crate::report::YearlyPerformance;
use chrono::Datelike;
use core_types::{DailyRecord, percent_change, population_std_dev, round2};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Groups a sorted sequence by calendar year and summarizes each year.
///
/// Years come out in ascending order.
pub fn yearly_performance(sorted: &[DailyRecord]) -> Vec<YearlyPerformance> {
    let mut years: BTreeMap<i32, Vec<&DailyRecord>> = BTreeMap::new();
    for record in sorted {
        years.entry(record.trading_day.year()).or_default().push(record);
    }

    years
        .into_iter()
        .filter_map(|(year, items)| summarize_year(year, &items))
        .collect()
}

fn summarize_year(year: i32, items: &[&DailyRecord]) -> Option<YearlyPerformance> {
    let (first, last) = (items.first()?, items.last()?);

    let total_volume: Decimal = items.iter().map(|r| Decimal::from(r.volume)).sum();
    let changes: Vec<Decimal> = items.iter().filter_map(|r| r.percent_change).collect();

    Some(YearlyPerformance {
        year,
        trading_days: items.len(),
        start_price: first.close,
        end_price: last.close,
        performance_pct: percent_change(first.close, last.close).ok().map(round2),
        average_volume: round2(total_volume / Decimal::from(items.len())),
        volatility: population_std_dev(&changes).ok().map(round2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(date: &str, open: Decimal, close: Decimal, volume: u64) -> DailyRecord {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        DailyRecord::new(date, day, open, close.max(open), close.min(open), close, None, volume)
    }

    #[test]
    fn one_entry_per_year_in_ascending_order() {
        let records = vec![
            record("1980-12-12", dec!(100), dec!(100), 100),
            record("1980-12-15", dec!(100), dec!(110), 300),
            record("1981-01-02", dec!(100), dec!(105), 50),
            record("1981-12-31", dec!(100), dec!(95), 150),
        ];
        let years = yearly_performance(&records);

        assert_eq!(years.len(), 2);
        assert_eq!(years[0].year, 1980);
        assert_eq!(years[0].trading_days, 2);
        assert_eq!(years[0].start_price, dec!(100));
        assert_eq!(years[0].end_price, dec!(110));
        assert_eq!(years[0].performance_pct, Some(dec!(10)));
        assert_eq!(years[0].average_volume, dec!(200));
        // Signed changes 0 and +10 around a mean of 5.
        assert_eq!(years[0].volatility, Some(dec!(5)));

        assert_eq!(years[1].year, 1981);
        assert_eq!(years[1].performance_pct, Some(dec!(-9.52)));
        // Signed changes +5 and -5: the sign matters, so the spread is 5.
        assert_eq!(years[1].volatility, Some(dec!(5)));
    }

    #[test]
    fn year_with_only_zero_opens_has_undefined_volatility() {
        let records = vec![record("1999-03-01", dec!(0), dec!(1), 10)];
        let years = yearly_performance(&records);
        assert_eq!(years[0].volatility, None);
    }
}
