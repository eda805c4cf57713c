//! Side-by-side comparison of the two regimes for one income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::income_tax::{
    TaxComputation, compute_new_regime_tax, compute_old_regime_tax,
};
use crate::models::{Deductions, Regime};

/// Both regime computations plus the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub new_regime: TaxComputation,
    pub old_regime: TaxComputation,

    /// The regime with the lower liability. Ties go to New, which is also
    /// the statutory default election.
    pub better_regime: Regime,

    /// Absolute difference between the two liabilities.
    pub savings: Decimal,
}

/// Computes both regimes and picks the cheaper one.
///
/// `better_regime` is Old only when the old regime liability is strictly
/// lower; equal liabilities favor New.
pub fn compare_regimes(
    gross_income: Decimal,
    is_salaried: bool,
    deductions: &Deductions,
) -> RegimeComparison {
    let new_regime = compute_new_regime_tax(gross_income, is_salaried);
    let old_regime = compute_old_regime_tax(gross_income, deductions, is_salaried);

    let better_regime = if old_regime.total_tax < new_regime.total_tax {
        Regime::Old
    } else {
        Regime::New
    };
    let savings = (new_regime.total_tax - old_regime.total_tax).abs();

    RegimeComparison {
        new_regime,
        old_regime,
        better_regime,
        savings,
    }
}
