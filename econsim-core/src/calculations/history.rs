//! Year-over-year tax comparison across new-regime rule sets.
//!
//! Each Budget since FY 2023-24 has reshaped the new regime: wider bands, a
//! larger standard deduction, a bigger rebate. Computing the same income
//! under each year's rules shows the taxpayer what those changes were worth.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use econsim_core::calculations::compare_across_years;
//!
//! let comparison = compare_across_years(dec!(1000000), true);
//!
//! assert_eq!(comparison.yearly[0].computation.total_tax, dec!(54600));
//! assert_eq!(comparison.yearly[2].computation.total_tax, dec!(0));
//! assert_eq!(comparison.savings_vs_2023, dec!(54600));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::ratio_as_percent;
use crate::calculations::income_tax::{RegimeCalculator, RegimeParameters, TaxComputation};
use crate::models::{TaxSlab, new_regime_slabs_2023, new_regime_slabs_2024, new_regime_slabs_2025};

/// Fiscal years with a distinct new-regime rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FiscalYear {
    Fy2023,
    Fy2024,
    Fy2025,
}

impl FiscalYear {
    /// All supported years, oldest first.
    pub const ALL: [Self; 3] = [Self::Fy2023, Self::Fy2024, Self::Fy2025];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fy2023 => "FY 2023-24",
            Self::Fy2024 => "FY 2024-25",
            Self::Fy2025 => "FY 2025-26",
        }
    }

    /// The new-regime slab schedule in force for this year.
    pub fn slabs(&self) -> Vec<TaxSlab> {
        match self {
            Self::Fy2023 => new_regime_slabs_2023(),
            Self::Fy2024 => new_regime_slabs_2024(),
            Self::Fy2025 => new_regime_slabs_2025(),
        }
    }

    /// The deduction, rebate and cess parameters in force for this year.
    pub fn parameters(&self) -> RegimeParameters {
        match self {
            Self::Fy2023 => RegimeParameters::new_regime_2023(),
            Self::Fy2024 => RegimeParameters::new_regime_2024(),
            Self::Fy2025 => RegimeParameters::new_regime_2025(),
        }
    }
}

/// One year's liability within a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyTax {
    pub year: FiscalYear,
    pub computation: TaxComputation,
}

/// The same income computed under every supported year's new-regime rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearOverYearComparison {
    /// Per-year results, oldest first.
    pub yearly: Vec<YearlyTax>,

    /// Current-year tax relative to FY 2023-24. Positive means the Budget
    /// changes lowered the bill.
    pub savings_vs_2023: Decimal,

    /// `savings_vs_2023` as a percentage of the FY 2023-24 liability; 0 when
    /// that liability is 0.
    pub percent_savings: Decimal,
}

/// Computes one year's new-regime liability for a gross income.
pub fn compute_year_tax(
    year: FiscalYear,
    gross_income: Decimal,
    is_salaried: bool,
) -> TaxComputation {
    let slabs = year.slabs();
    RegimeCalculator::new(&slabs, year.parameters()).calculate(
        gross_income,
        Decimal::ZERO,
        is_salaried,
    )
}

/// Runs the same income through every supported year's new-regime rules.
///
/// Total like the single-year entry points: negative income clamps to zero
/// and a zero FY 2023-24 liability yields a zero savings percentage.
pub fn compare_across_years(gross_income: Decimal, is_salaried: bool) -> YearOverYearComparison {
    let yearly: Vec<YearlyTax> = FiscalYear::ALL
        .into_iter()
        .map(|year| YearlyTax {
            year,
            computation: compute_year_tax(year, gross_income, is_salaried),
        })
        .collect();

    let oldest = yearly[0].computation.total_tax;
    let current = yearly[yearly.len() - 1].computation.total_tax;
    let savings_vs_2023 = oldest - current;
    let percent_savings = ratio_as_percent(savings_vs_2023, oldest);

    YearOverYearComparison {
        yearly,
        savings_vs_2023,
        percent_savings,
    }
}
