//! Personal inflation: how a macro price shock lands on one household's
//! basket.
//!
//! The basket is split into food, fuel, and everything else, each inflated
//! by its own shock rate. A ration card substitutes the subsidised
//! food-price path for the open-market one, shielding the household from
//! most of a food supply shock.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{ratio_as_percent, round_half_up};

/// Basket shares and shock rates for the projection, all fractions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationAssumptions {
    /// Share of the basket spent on food.
    pub food_share: Decimal,

    /// Share of the basket spent on fuel.
    pub fuel_share: Decimal,

    /// Open-market food price shock.
    pub food_shock: Decimal,

    /// Food price shock for ration-card holders buying through the public
    /// distribution system.
    pub protected_food_shock: Decimal,

    /// Fuel price shock.
    pub fuel_shock: Decimal,

    /// Core inflation applied to the rest of the basket.
    pub core_rate: Decimal,
}

impl InflationAssumptions {
    /// The current scenario: volatile food (8% open market, 2% through the
    /// PDS), fuel up 5%, core inflation at 2.4%, with a 30/15/55
    /// food/fuel/other split.
    pub fn current() -> Self {
        Self {
            food_share: Decimal::new(30, 2),
            fuel_share: Decimal::new(15, 2),
            food_shock: Decimal::new(8, 2),
            protected_food_shock: Decimal::new(2, 2),
            fuel_shock: Decimal::new(5, 2),
            core_rate: Decimal::new(24, 3),
        }
    }
}

/// Result of projecting the shocks onto one household's monthly spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationImpact {
    pub base_expense: Decimal,
    pub inflated_expense: Decimal,

    /// Extra monthly spend needed to hold the same lifestyle.
    pub extra_monthly_cost: Decimal,

    /// Weighted basket inflation as a percentage; 0 for a zero basket.
    pub personal_inflation_rate: Decimal,
}

/// Applies the shock rates to a monthly expense figure.
///
/// `has_ration_card` selects the protected food-price path. Negative expense
/// is treated as zero.
pub fn project_personal_inflation(
    monthly_expense: Decimal,
    has_ration_card: bool,
    assumptions: &InflationAssumptions,
) -> InflationImpact {
    let base_expense = if monthly_expense < Decimal::ZERO {
        warn!(monthly_expense = %monthly_expense, "negative expense treated as zero");
        Decimal::ZERO
    } else {
        round_half_up(monthly_expense)
    };

    let food_shock = if has_ration_card {
        assumptions.protected_food_shock
    } else {
        assumptions.food_shock
    };

    let food = base_expense * assumptions.food_share;
    let fuel = base_expense * assumptions.fuel_share;
    let other = base_expense - food - fuel;

    let inflated_expense = round_half_up(
        food * (Decimal::ONE + food_shock)
            + fuel * (Decimal::ONE + assumptions.fuel_shock)
            + other * (Decimal::ONE + assumptions.core_rate),
    );
    let extra_monthly_cost = round_half_up(inflated_expense - base_expense);

    InflationImpact {
        base_expense,
        inflated_expense,
        extra_monthly_cost,
        personal_inflation_rate: ratio_as_percent(extra_monthly_cost, base_expense),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn open_market_household_bears_the_full_food_shock() {
        let impact =
            project_personal_inflation(dec!(10000), false, &InflationAssumptions::current());

        // food 3000*1.08 + fuel 1500*1.05 + other 5500*1.024 = 10447
        assert_eq!(impact.inflated_expense, dec!(10447));
        assert_eq!(impact.extra_monthly_cost, dec!(447));
        assert_eq!(impact.personal_inflation_rate, dec!(4.47));
    }

    #[test]
    fn ration_card_shields_the_food_share() {
        let impact =
            project_personal_inflation(dec!(10000), true, &InflationAssumptions::current());

        // food 3000*1.02 + fuel 1500*1.05 + other 5500*1.024 = 10267
        assert_eq!(impact.inflated_expense, dec!(10267));
        assert_eq!(impact.personal_inflation_rate, dec!(2.67));
    }

    #[test]
    fn zero_basket_projects_zero_rate() {
        let impact = project_personal_inflation(dec!(0), false, &InflationAssumptions::current());

        assert_eq!(impact.extra_monthly_cost, dec!(0));
        assert_eq!(impact.personal_inflation_rate, dec!(0));
    }

    #[test]
    fn negative_expense_is_treated_as_zero() {
        let impact =
            project_personal_inflation(dec!(-5000), false, &InflationAssumptions::current());

        assert_eq!(impact.base_expense, dec!(0));
        assert_eq!(impact.personal_inflation_rate, dec!(0));
    }

    #[test]
    fn ration_card_never_costs_more_than_open_market() {
        let assumptions = InflationAssumptions::current();

        for expense in [dec!(5000), dec!(20000), dec!(41500)] {
            let open = project_personal_inflation(expense, false, &assumptions);
            let protected = project_personal_inflation(expense, true, &assumptions);
            assert!(protected.inflated_expense <= open.inflated_expense);
        }
    }
}
