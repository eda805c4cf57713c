//! Annualised value of government contribution and subsidy schemes.
//!
//! Schemes come in two shapes: matched-contribution schemes where both sides
//! pay a percentage of income (EPF, NPS), and fixed-amount schemes where
//! rupee figures recur some number of times a year (LPG cylinders, direct
//! cash transfers).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// How a scheme's contribution figures are to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionBasis {
    /// Contributions are fractions of annual income (0.12 = 12% of salary).
    PercentOfIncome,

    /// Contributions are rupee amounts recurring `periods_per_year` times.
    FixedPerPeriod { periods_per_year: u32 },
}

/// One scheme with the contribution split between the member and the
/// government.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyScheme {
    pub name: String,
    pub category: String,

    /// What the member pays, read per [`ContributionBasis`].
    pub user_contribution: Decimal,

    /// What the government adds, read per [`ContributionBasis`].
    pub govt_contribution: Decimal,

    pub basis: ContributionBasis,
}

/// Annualised value of one scheme for one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyBenefit {
    pub user_annual: Decimal,
    pub govt_annual: Decimal,

    /// Combined yearly flow into the member's benefit.
    pub total_annual: Decimal,
}

/// Annualises a scheme's contributions for a member with the given income.
///
/// Percentage-basis schemes scale with income; fixed-basis schemes ignore it.
pub fn annual_benefit(scheme: &SubsidyScheme, annual_income: Decimal) -> SubsidyBenefit {
    let (user_annual, govt_annual) = match scheme.basis {
        ContributionBasis::PercentOfIncome => (
            round_half_up(scheme.user_contribution * annual_income),
            round_half_up(scheme.govt_contribution * annual_income),
        ),
        ContributionBasis::FixedPerPeriod { periods_per_year } => {
            let periods = Decimal::from(periods_per_year);
            (
                round_half_up(scheme.user_contribution * periods),
                round_half_up(scheme.govt_contribution * periods),
            )
        }
    };

    SubsidyBenefit {
        user_annual,
        govt_annual,
        total_annual: round_half_up(user_annual + govt_annual),
    }
}

/// Reference catalog of major central schemes.
pub fn reference_schemes() -> Vec<SubsidyScheme> {
    let percent = |name: &str, category: &str, user_bp: i64, govt_bp: i64| SubsidyScheme {
        name: name.to_string(),
        category: category.to_string(),
        user_contribution: Decimal::new(user_bp, 4),
        govt_contribution: Decimal::new(govt_bp, 4),
        basis: ContributionBasis::PercentOfIncome,
    };
    let fixed = |name: &str, category: &str, user: i64, govt: i64, periods: u32| SubsidyScheme {
        name: name.to_string(),
        category: category.to_string(),
        user_contribution: Decimal::from(user),
        govt_contribution: Decimal::from(govt),
        basis: ContributionBasis::FixedPerPeriod {
            periods_per_year: periods,
        },
    };
    vec![
        percent("Employees Provident Fund (EPF)", "Retirement Savings", 1200, 367),
        percent("National Pension Scheme (NPS)", "Retirement Planning", 1000, 1400),
        fixed("PM Jan Dhan Yojana (PMJDY)", "Financial Inclusion", 0, 130_000, 1),
        fixed("LPG Gas Subsidy (DBT)", "Essential Commodities", 600, 300, 12),
        fixed("Education Loan Interest Subsidy", "Education Support", 0, 45_000, 1),
        fixed("PM Awas Yojana", "Housing Support", 500_000, 267_000, 1),
        fixed("PM Kisan Samman Nidhi", "Agricultural Support", 0, 6_000, 1),
    ]
}
