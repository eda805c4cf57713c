//! Progressive slab computation for the Indian new and old income-tax
//! regimes (FY 2025-26).
//!
//! # Computation steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Clamp negative gross income to zero |
//! | 2    | Standard deduction (₹75,000 new / ₹50,000 old, salaried only) |
//! | 3    | Taxable income = max(0, income − total deductions) |
//! | 4    | Walk the slab schedule; tax each band's portion at its rate |
//! | 5    | Rebate u/s 87A below the threshold, capped, floored at zero |
//! | 6    | Marginal relief: cap tax at the excess over the rebate threshold |
//! | 7    | Health & education cess (4%) on the post-relief tax |
//! | 8    | Effective rate and net income (zero income guards to 0%) |
//!
//! Marginal relief exists because the rebate vanishes all at once: without
//! it, crossing ₹12,00,000 taxable by one rupee would produce a tax bill far
//! larger than the rupee earned. Within the relief window the liability is
//! capped at exactly the income in excess of the threshold.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use econsim_core::calculations::compute_new_regime_tax;
//!
//! let result = compute_new_regime_tax(dec!(2000000), true);
//!
//! assert_eq!(result.taxable_income, dec!(1925000));
//! assert_eq!(result.slab_tax, dec!(185000));
//! assert_eq!(result.cess, dec!(7400));
//! assert_eq!(result.total_tax, dec!(192400));
//! assert_eq!(result.effective_rate, dec!(9.62));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{ratio_as_percent, round_half_up};
use crate::models::{Deductions, TaxSlab, new_regime_slabs_2025, old_regime_slabs};

/// Regime-specific thresholds applied around the slab walk.
///
/// These are the constants that change with a Finance Act; the slab schedule
/// itself lives in [`crate::models`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeParameters {
    /// Flat deduction applied when the taxpayer is salaried.
    pub standard_deduction: Decimal,

    /// Taxable-income ceiling for the Section 87A rebate.
    pub rebate_threshold: Decimal,

    /// Maximum rebate amount.
    pub rebate_cap: Decimal,

    /// Upper edge of the marginal-relief window, if the regime has one.
    /// Relief applies to taxable incomes in `(rebate_threshold, limit]`.
    pub marginal_relief_limit: Option<Decimal>,

    /// Health and education cess rate applied to the post-relief tax.
    pub cess_rate: Decimal,
}

impl RegimeParameters {
    /// FY 2025-26 new regime: ₹75,000 standard deduction, ₹60,000 rebate up
    /// to ₹12,00,000 taxable, marginal relief to ₹12,75,000, 4% cess.
    pub fn new_regime_2025() -> Self {
        Self {
            standard_deduction: Decimal::from(75_000),
            rebate_threshold: Decimal::from(1_200_000),
            rebate_cap: Decimal::from(60_000),
            marginal_relief_limit: Some(Decimal::from(1_275_000)),
            cess_rate: Decimal::new(4, 2),
        }
    }

    /// FY 2023-24 new regime: ₹50,000 standard deduction, ₹25,000 rebate up
    /// to ₹7,00,000 taxable, 4% cess. No marginal-relief window existed yet;
    /// the rebate simply stops past the threshold.
    pub fn new_regime_2023() -> Self {
        Self {
            standard_deduction: Decimal::from(50_000),
            rebate_threshold: Decimal::from(700_000),
            rebate_cap: Decimal::from(25_000),
            marginal_relief_limit: None,
            cess_rate: Decimal::new(4, 2),
        }
    }

    /// FY 2024-25 new regime: the standard deduction raised to ₹75,000, the
    /// rebate unchanged from FY 2023-24.
    pub fn new_regime_2024() -> Self {
        Self {
            standard_deduction: Decimal::from(75_000),
            ..Self::new_regime_2023()
        }
    }

    /// Old regime: ₹50,000 standard deduction, ₹12,500 rebate up to
    /// ₹5,00,000 taxable, 4% cess. No marginal-relief clause; the rebate
    /// cliff there is small.
    pub fn old_regime() -> Self {
        Self {
            standard_deduction: Decimal::from(50_000),
            rebate_threshold: Decimal::from(500_000),
            rebate_cap: Decimal::from(12_500),
            marginal_relief_limit: None,
            cess_rate: Decimal::new(4, 2),
        }
    }
}

/// Result of a single-regime tax computation.
///
/// Fully derived from the inputs; recomputed on every input change. The
/// intermediate values (`slab_tax`, `rebate`, `marginal_relief`) are exposed
/// so callers can show the taxpayer how the final figure came about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputation {
    /// Gross income after the negative-input clamp.
    pub gross_income: Decimal,

    /// Standard deduction actually applied (zero for non-salaried).
    pub standard_deduction: Decimal,

    /// Standard deduction plus all clamped Chapter VI-A deductions.
    pub total_deductions: Decimal,

    /// Income remaining after deductions, floored at zero.
    pub taxable_income: Decimal,

    /// Tax from the progressive slab walk, before rebate and relief.
    pub slab_tax: Decimal,

    /// Section 87A rebate applied (zero above the threshold).
    pub rebate: Decimal,

    /// Reduction from the marginal-relief cap (zero outside the window).
    pub marginal_relief: Decimal,

    /// Health and education cess on the post-relief tax.
    pub cess: Decimal,

    /// Final liability: post-relief tax plus cess.
    pub total_tax: Decimal,

    /// Gross income minus total tax.
    pub net_income: Decimal,

    /// Total tax as a percentage of gross income; 0 when income is 0.
    pub effective_rate: Decimal,
}

/// Calculator for one regime: a slab schedule plus its surrounding
/// parameters.
///
/// The slab schedule must be sorted by `lower_bound` in ascending order and
/// cover `[0, ∞)` without gaps (the built-in schedules do; validate
/// caller-supplied ones with [`crate::models::validate_schedule`]).
/// `calculate` itself is total: every numeric input produces a result.
#[derive(Debug, Clone)]
pub struct RegimeCalculator<'a> {
    slabs: &'a [TaxSlab],
    params: RegimeParameters,
}

impl<'a> RegimeCalculator<'a> {
    pub fn new(slabs: &'a [TaxSlab], params: RegimeParameters) -> Self {
        Self { slabs, params }
    }

    /// Runs the full computation for one regime.
    ///
    /// `extra_deductions` is the already-clamped Chapter VI-A total (zero for
    /// the new regime); the standard deduction is added here based on
    /// `is_salaried`.
    pub fn calculate(
        &self,
        gross_income: Decimal,
        extra_deductions: Decimal,
        is_salaried: bool,
    ) -> TaxComputation {
        let gross_income = self.clamped_income(gross_income);
        let standard_deduction = self.standard_deduction(is_salaried);
        let total_deductions = round_half_up(standard_deduction + extra_deductions);
        let taxable_income = self.taxable_income(gross_income, total_deductions);

        let slab_tax = self.slab_tax(taxable_income);
        let rebate = self.rebate(taxable_income, slab_tax);
        let after_rebate = slab_tax - rebate;
        let marginal_relief = self.marginal_relief(taxable_income, after_rebate);
        let tax = after_rebate - marginal_relief;

        let cess = self.cess(tax);
        let total_tax = round_half_up(tax + cess);
        let net_income = round_half_up(gross_income - total_tax);
        let effective_rate = ratio_as_percent(total_tax, gross_income);

        TaxComputation {
            gross_income,
            standard_deduction,
            total_deductions,
            taxable_income,
            slab_tax,
            rebate,
            marginal_relief,
            cess,
            total_tax,
            net_income,
            effective_rate,
        }
    }

    /// Clamps negative gross income to zero (Step 1).
    fn clamped_income(&self, gross_income: Decimal) -> Decimal {
        if gross_income < Decimal::ZERO {
            warn!(gross_income = %gross_income, "negative gross income treated as zero");
            return Decimal::ZERO;
        }
        round_half_up(gross_income)
    }

    /// Standard deduction, applied only to salaried income (Step 2).
    fn standard_deduction(&self, is_salaried: bool) -> Decimal {
        if is_salaried {
            self.params.standard_deduction
        } else {
            Decimal::ZERO
        }
    }

    /// Taxable income after deductions, floored at zero (Step 3).
    fn taxable_income(&self, gross_income: Decimal, total_deductions: Decimal) -> Decimal {
        round_half_up(gross_income - total_deductions).max(Decimal::ZERO)
    }

    /// Progressive slab walk (Step 4).
    ///
    /// Each slab taxes only the portion of income inside its band, so the
    /// marginal rate applies to the margin and never to the whole income.
    fn slab_tax(&self, taxable_income: Decimal) -> Decimal {
        let mut tax = Decimal::ZERO;
        for slab in self.slabs {
            if taxable_income <= slab.lower_bound {
                break;
            }
            let band_top = slab
                .upper_bound
                .map_or(taxable_income, |upper| upper.min(taxable_income));
            tax += (band_top - slab.lower_bound) * slab.rate;
        }
        round_half_up(tax)
    }

    /// Section 87A rebate below the threshold (Step 5).
    fn rebate(&self, taxable_income: Decimal, slab_tax: Decimal) -> Decimal {
        if taxable_income <= self.params.rebate_threshold {
            slab_tax.min(self.params.rebate_cap)
        } else {
            Decimal::ZERO
        }
    }

    /// Marginal relief just past the rebate threshold (Step 6).
    ///
    /// Within the window, liability is capped at the taxable income in
    /// excess of the threshold. Returns the reduction applied.
    fn marginal_relief(&self, taxable_income: Decimal, tax: Decimal) -> Decimal {
        let Some(limit) = self.params.marginal_relief_limit else {
            return Decimal::ZERO;
        };
        if taxable_income <= self.params.rebate_threshold || taxable_income > limit {
            return Decimal::ZERO;
        }
        let excess_income = taxable_income - self.params.rebate_threshold;
        if tax > excess_income {
            tax - excess_income
        } else {
            Decimal::ZERO
        }
    }

    /// Health and education cess (Step 7).
    fn cess(&self, tax: Decimal) -> Decimal {
        round_half_up(tax * self.params.cess_rate)
    }
}

/// Computes the FY 2025-26 new regime liability.
///
/// Total over its domain: negative income clamps to zero, zero income yields
/// a zero effective rate, and no input panics.
pub fn compute_new_regime_tax(gross_income: Decimal, is_salaried: bool) -> TaxComputation {
    let slabs = new_regime_slabs_2025();
    RegimeCalculator::new(&slabs, RegimeParameters::new_regime_2025()).calculate(
        gross_income,
        Decimal::ZERO,
        is_salaried,
    )
}

/// Computes the old regime liability with Chapter VI-A deductions.
///
/// Each deduction field is clamped to its statutory cap (and to zero from
/// below) before entering the computation.
pub fn compute_old_regime_tax(
    gross_income: Decimal,
    deductions: &Deductions,
    is_salaried: bool,
) -> TaxComputation {
    let slabs = old_regime_slabs();
    RegimeCalculator::new(&slabs, RegimeParameters::old_regime()).calculate(
        gross_income,
        deductions.clamped_total(),
        is_salaried,
    )
}
