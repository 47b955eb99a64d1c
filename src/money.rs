//! Shared monetary rounding and formatting helpers.
//!
//! Kuwaiti dinar amounts are carried to fils precision: 3 decimal places,
//! rounded to the nearest thousandth with ties away from zero. Every derived
//! quantity in the engine passes through [`fils`] so that serialized output
//! is a stable fixed-point string such as `"190.000"` or `"157.500"`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a dinar amount to fils precision.
///
/// The result is rounded to 3 decimal places (ties away from zero) and
/// rescaled to exactly scale 3, so `Display` and serde output always carry
/// three fractional digits.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use wfs_engine::money::fils;
///
/// let tax = Decimal::from_str("157.4998950").unwrap();
/// assert_eq!(fils(tax).to_string(), "157.500");
/// assert_eq!(fils(Decimal::from(190)).to_string(), "190.000");
/// ```
pub fn fils(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(3);
    rounded
}

/// Formats a dinar amount as a fixed-point string with 3 decimal places.
pub fn format_kwd(value: Decimal) -> String {
    fils(value).to_string()
}

/// Converts a percentage (e.g. `10.5`) to its fractional multiplier (`0.105`).
pub fn percent(rate: Decimal) -> Decimal {
    rate / Decimal::ONE_HUNDRED
}

/// Rounds a percentage figure to 2 decimal places, ties away from zero.
///
/// Used for display rates such as the effective interest rate of a loan.
pub fn round_rate(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
