//! Result formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::MAX_DECIMAL_PLACES;

/// Format a result for display.
///
/// Whole numbers render without a decimal point. Fractions are rounded to
/// at most three places (midpoint away from zero) with trailing zeros removed.
#[must_use]
pub fn format_result(value: Decimal) -> String {
    let shown = if value.fract().is_zero() {
        value.trunc()
    } else {
        value.round_dp_with_strategy(MAX_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    };
    if shown.is_zero() {
        return "0".to_string();
    }
    shown.normalize().to_string()
}
