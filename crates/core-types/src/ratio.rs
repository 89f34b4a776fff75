use crate::error::CoreError;
use rust_decimal::prelude::*;

/// Percent change from `base` to `value`, i.e. `(value - base) / base * 100`.
///
/// Returns `CoreError::UndefinedRatio` when `base` is zero or the result does
/// not fit in a `Decimal`.
pub fn percent_change(base: Decimal, value: Decimal) -> Result<Decimal, CoreError> {
    if base.is_zero() {
        return Err(CoreError::UndefinedRatio("percent change".to_string()));
    }
    value
        .checked_sub(base)
        .and_then(|diff| diff.checked_div(base))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| CoreError::UndefinedRatio("percent change overflowed".to_string()))
}

/// Population standard deviation (divides by N).
///
/// Returns `CoreError::UndefinedRatio` for an empty sample or when an
/// intermediate sum overflows.
pub fn population_std_dev(values: &[Decimal]) -> Result<Decimal, CoreError> {
    if values.is_empty() {
        return Err(CoreError::UndefinedRatio("standard deviation".to_string()));
    }
    let overflow = || CoreError::UndefinedRatio("standard deviation overflowed".to_string());
    let n = Decimal::from(values.len());

    let mean = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
        .and_then(|sum| sum.checked_div(n))
        .ok_or_else(overflow)?;
    let variance = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| {
            let dev = v.checked_sub(mean)?;
            acc.checked_add(dev.checked_mul(dev)?)
        })
        .and_then(|sum| sum.checked_div(n))
        .ok_or_else(overflow)?;

    variance.sqrt().ok_or_else(|| {
        CoreError::InvalidInput("variance".to_string(), format!("cannot take sqrt of {variance}"))
    })
}
