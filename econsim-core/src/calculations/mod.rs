//! Calculation modules for the personal-finance simulator.
//!
//! Every calculator here is a pure, single-pass, total function over its
//! inputs: invalid numeric input clamps rather than errors, zero
//! denominators are guarded to zero, and identical inputs always yield
//! identical outputs.

pub mod common;
pub mod comparison;
pub mod gst;
pub mod history;
pub mod import_duty;
pub mod income_tax;
pub mod inflation;
pub mod policy;
pub mod subsidy;

pub use comparison::{RegimeComparison, compare_regimes};
pub use gst::{GstImpact, compute_gst_impact};
pub use history::{
    FiscalYear, YearOverYearComparison, YearlyTax, compare_across_years, compute_year_tax,
};
pub use import_duty::{
    ImportDutyBreakdown, ImportedProduct, compute_import_duty, reference_imports,
};
pub use income_tax::{
    RegimeCalculator, RegimeParameters, TaxComputation, compute_new_regime_tax,
    compute_old_regime_tax,
};
pub use inflation::{InflationAssumptions, InflationImpact, project_personal_inflation};
pub use policy::{
    ASSUMED_MONTHLY_FUEL_LITRES, PolicyAdjustments, PolicyImpact, simulate_policy,
};
pub use subsidy::{
    ContributionBasis, SubsidyBenefit, SubsidyScheme, annual_benefit, reference_schemes,
};
