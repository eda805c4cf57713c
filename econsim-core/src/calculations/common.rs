//! Shared helpers for the calculators: financial rounding and guarded
//! percentage ratios.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (midpoints move away from zero), the standard financial
/// convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use econsim_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(47.619)), dec!(47.62));
/// assert_eq!(round_half_up(dec!(47.615)), dec!(47.62));
/// assert_eq!(round_half_up(dec!(-47.615)), dec!(-47.62)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Expresses `part` as a percentage of `whole`, rounded to two decimal
/// places, with a zero denominator defined as 0 rather than a division
/// error.
///
/// Both effective-rate outputs (income tax and GST) route through this guard.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use econsim_core::calculations::common::ratio_as_percent;
///
/// assert_eq!(ratio_as_percent(dec!(192400), dec!(2000000)), dec!(9.62));
/// assert_eq!(ratio_as_percent(dec!(100), dec!(0)), dec!(0));
/// ```
pub fn ratio_as_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole == Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(part / whole * Decimal::ONE_HUNDRED)
}
