//! Customs duty on imported goods: landed price from base price and duty
//! rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::round_half_up;

/// An imported product with its customs duty rate (fraction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedProduct {
    pub name: String,
    pub base_price: Decimal,
    pub duty_rate: Decimal,
}

/// Duty breakdown for one import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDutyBreakdown {
    pub base_price: Decimal,
    pub duty_amount: Decimal,

    /// Base price plus duty.
    pub landed_price: Decimal,
}

/// Computes the duty and landed price for one import.
///
/// Negative inputs clamp to zero; duty is a straight fraction of the base
/// price (IGST and cesses on imports are out of scope here).
pub fn compute_import_duty(base_price: Decimal, duty_rate: Decimal) -> ImportDutyBreakdown {
    let base_price = clamp_non_negative("base_price", base_price);
    let duty_rate = clamp_non_negative("duty_rate", duty_rate);

    let duty_amount = round_half_up(base_price * duty_rate);
    ImportDutyBreakdown {
        base_price,
        duty_amount,
        landed_price: round_half_up(base_price + duty_amount),
    }
}

fn clamp_non_negative(field: &str, value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        warn!(field, value = %value, "negative value treated as zero");
        Decimal::ZERO
    } else {
        value
    }
}

/// Reference catalog of common imports and their duty rates.
pub fn reference_imports() -> Vec<ImportedProduct> {
    let product = |name: &str, base_price: i64, duty_percent: i64| ImportedProduct {
        name: name.to_string(),
        base_price: Decimal::from(base_price),
        duty_rate: Decimal::new(duty_percent, 2),
    };
    vec![
        product("Smartphone", 25_000, 20),
        product("Laptop", 60_000, 20),
        product("Crude Oil (per barrel)", 6_500, 5),
        product("Washing Machine", 35_000, 20),
        product("Semiconductor Chip", 500, 15),
        product("Wheat (per kg)", 20, 40),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn duty_adds_the_rate_share_to_the_base_price() {
        let breakdown = compute_import_duty(dec!(25000), dec!(0.20));

        assert_eq!(breakdown.duty_amount, dec!(5000));
        assert_eq!(breakdown.landed_price, dec!(30000));
    }

    #[test]
    fn zero_rate_leaves_the_price_unchanged() {
        let breakdown = compute_import_duty(dec!(1000), dec!(0));

        assert_eq!(breakdown.duty_amount, dec!(0));
        assert_eq!(breakdown.landed_price, dec!(1000));
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        let breakdown = compute_import_duty(dec!(-100), dec!(-0.20));

        assert_eq!(breakdown.base_price, dec!(0));
        assert_eq!(breakdown.landed_price, dec!(0));
    }

    #[test]
    fn duty_rounds_half_up() {
        let breakdown = compute_import_duty(dec!(333.33), dec!(0.15));

        // 333.33 * 0.15 = 49.9995 -> 50.00
        assert_eq!(breakdown.duty_amount, dec!(50.00));
        assert_eq!(breakdown.landed_price, dec!(383.33));
    }

    #[test]
    fn catalog_wheat_carries_the_protective_rate() {
        let catalog = reference_imports();
        let wheat = catalog.iter().find(|p| p.name.starts_with("Wheat")).unwrap();

        assert_eq!(wheat.duty_rate, dec!(0.40));
        // 20/kg -> 28/kg landed
        let breakdown = compute_import_duty(wheat.base_price, wheat.duty_rate);
        assert_eq!(breakdown.landed_price, dec!(28));
    }
}
