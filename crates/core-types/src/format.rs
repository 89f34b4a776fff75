use rust_decimal::prelude::*;

/// Rounds half away from zero to two decimal places.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders `value` with exactly `dp` decimal places, rounding half away from zero.
pub fn to_fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// Shortens large counts: `X.YM` from one million, `X.YK` from one thousand,
/// the plain integer below that.
pub fn format_large_number(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{}M", to_fixed(Decimal::from(value) / Decimal::from(1_000_000), 1))
    } else if value >= 1_000 {
        format!("{}K", to_fixed(Decimal::from(value) / Decimal::ONE_THOUSAND, 1))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn large_number_magnitudes() {
        assert_eq!(format_large_number(999), "999");
        assert_eq!(format_large_number(1_000), "1.0K");
        assert_eq!(format_large_number(12_345), "12.3K");
        assert_eq!(format_large_number(1_250_000), "1.3M");
        assert_eq!(format_large_number(117_258_400), "117.3M");
        assert_eq!(format_large_number(999_950), "1000.0K");
    }

    #[test]
    fn fixed_pads_and_rounds() {
        assert_eq!(to_fixed(dec!(90), 2), "90.00");
        assert_eq!(to_fixed(dec!(2.345), 2), "2.35");
        assert_eq!(to_fixed(dec!(-2.345), 2), "-2.35");
        assert_eq!(round2(dec!(0.125)), dec!(0.13));
    }
}
