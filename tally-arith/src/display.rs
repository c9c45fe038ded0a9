//! Fixed-point formatting for operation records.
//!
//! Rounding starts from the shortest decimal that round-trips to the `f64`
//! (`0.125`, not its binary expansion) and breaks ties away from zero, so
//! `0.125` shows as `0.13` and a root index of `2.5` as `3`. Non-finite values
//! print as `NaN`, `Infinity` and `-Infinity`.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Text used for non-finite values, or `None` when `value` is finite.
pub(crate) fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Format `value` with exactly `precision` decimals.
pub(crate) fn fixed(value: f64, precision: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let dp = u32::try_from(precision).unwrap_or(u32::MAX);
            let rounded =
                decimal.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        // Beyond the Decimal range the value is integral, so its shortest
        // form only needs zero decimals appended
        Err(_) if value.abs() >= 1.0 => match precision {
            0 => value.to_string(),
            _ => format!("{value}.{}", "0".repeat(precision)),
        },
        Err(_) => format!("{value:.precision$}"),
    }
}
