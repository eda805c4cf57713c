//! Embedded GST estimation over a tax-inclusive expense basket.
//!
//! Every stored amount is the price the consumer already pays, so the
//! embedded tax is recovered by back-calculation:
//!
//! ```text
//! gst_portion = amount − amount / (1 + rate)
//! ```
//!
//! Multiplying the rate onto the inclusive amount would double-count the tax
//! already inside it; a ₹118 bill at 18% carries ₹18 of GST on a ₹100 base,
//! not ₹21.24.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use econsim_core::calculations::compute_gst_impact;
//! use econsim_core::models::{ExpenseItem, GstCategory};
//!
//! let items = vec![ExpenseItem::new("Soap", GstCategory::StandardHigh, dec!(118))];
//! let impact = compute_gst_impact(&items);
//!
//! assert_eq!(impact.total_gst, dec!(18.00));
//! assert_eq!(impact.effective_gst_rate, dec!(15.25));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{ratio_as_percent, round_half_up};
use crate::models::ExpenseItem;

/// Aggregate GST burden over an expense basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstImpact {
    /// Sum of the tax-inclusive amounts.
    pub total_expense: Decimal,

    /// Sum of the embedded GST portions.
    pub total_gst: Decimal,

    /// `total_gst / total_expense × 100`; 0 for an empty or zero basket.
    pub effective_gst_rate: Decimal,
}

/// Back-calculates the embedded GST for each item and aggregates the basket.
///
/// Deliberately permissive, as befits a sandbox estimator rather than a
/// compliance tool: a negative rate is treated as 0 (with a warning) and
/// amounts are taken as given. The item list is never mutated.
pub fn compute_gst_impact(items: &[ExpenseItem]) -> GstImpact {
    let mut total_expense = Decimal::ZERO;
    let mut total_gst = Decimal::ZERO;

    for item in items {
        total_expense += item.amount;
        total_gst += embedded_gst(item);
    }

    let total_expense = round_half_up(total_expense);
    let total_gst = round_half_up(total_gst);

    GstImpact {
        total_expense,
        total_gst,
        effective_gst_rate: ratio_as_percent(total_gst, total_expense),
    }
}

/// GST embedded in one tax-inclusive amount.
fn embedded_gst(item: &ExpenseItem) -> Decimal {
    let rate = if item.gst_rate < Decimal::ZERO {
        warn!(item = %item.name, rate = %item.gst_rate, "negative GST rate treated as zero");
        Decimal::ZERO
    } else {
        item.gst_rate
    };
    round_half_up(item.amount - item.amount / (Decimal::ONE + rate))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{GstCategory, default_monthly_basket};

    fn item(amount: Decimal, rate: Decimal) -> ExpenseItem {
        ExpenseItem::with_rate("test item", GstCategory::StandardHigh, amount, rate)
    }

    // =========================================================================
    // embedded_gst tests
    // =========================================================================

    #[test]
    fn embedded_gst_recovers_the_exact_tax_from_an_inclusive_price() {
        // 118 at 18%: 100 base + 18 tax.
        assert_eq!(embedded_gst(&item(dec!(118), dec!(0.18))), dec!(18.00));
    }

    #[test]
    fn embedded_gst_is_not_the_naive_rate_multiplication() {
        let gst = embedded_gst(&item(dec!(118), dec!(0.18)));

        assert!(gst < dec!(118) * dec!(0.18));
    }

    #[test]
    fn embedded_gst_is_zero_for_exempt_items() {
        assert_eq!(embedded_gst(&item(dec!(5000), dec!(0))), dec!(0));
    }

    #[test]
    fn embedded_gst_treats_negative_rate_as_zero() {
        assert_eq!(embedded_gst(&item(dec!(1000), dec!(-0.18))), dec!(0));
    }

    #[test]
    fn embedded_gst_rounds_repeating_quotients_half_up() {
        // 1000 - 1000/1.05 = 47.619... -> 47.62
        assert_eq!(embedded_gst(&item(dec!(1000), dec!(0.05))), dec!(47.62));
    }

    // =========================================================================
    // compute_gst_impact tests
    // =========================================================================

    #[test]
    fn impact_aggregates_a_mixed_basket() {
        let items = vec![item(dec!(1000), dec!(0.05)), item(dec!(2000), dec!(0))];

        let impact = compute_gst_impact(&items);

        assert_eq!(impact.total_expense, dec!(3000));
        assert_eq!(impact.total_gst, dec!(47.62));
        // Denominator is the inclusive total expense, not the base.
        assert_eq!(impact.effective_gst_rate, dec!(1.59));
    }

    #[test]
    fn impact_of_empty_basket_is_all_zero() {
        let impact = compute_gst_impact(&[]);

        assert_eq!(impact.total_expense, dec!(0));
        assert_eq!(impact.total_gst, dec!(0));
        assert_eq!(impact.effective_gst_rate, dec!(0));
    }

    #[test]
    fn impact_guards_division_for_zero_amount_items() {
        let items = vec![item(dec!(0), dec!(0.18))];

        let impact = compute_gst_impact(&items);

        assert_eq!(impact.effective_gst_rate, dec!(0));
    }

    #[test]
    fn impact_over_the_default_basket() {
        let impact = compute_gst_impact(&default_monthly_basket());

        assert_eq!(impact.total_expense, dec!(41500));
        // Exempt items contribute nothing; the rest back-calculate per rate.
        assert!(impact.total_gst > dec!(0));
        assert!(impact.effective_gst_rate < dec!(28));
    }

    #[test]
    fn impact_is_idempotent() {
        let items = default_monthly_basket();

        assert_eq!(compute_gst_impact(&items), compute_gst_impact(&items));
    }
}
