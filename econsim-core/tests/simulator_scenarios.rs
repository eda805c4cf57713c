//! End-to-end scenarios exercising the public API the way the simulator's
//! frontend does: one income figure flowing through regime comparison, the
//! GST basket, and the policy sandbox.

use econsim_core::calculations::{
    FiscalYear, InflationAssumptions, PolicyAdjustments, compare_across_years, compare_regimes,
    compute_gst_impact, compute_new_regime_tax, project_personal_inflation, simulate_policy,
};
use econsim_core::format::format_inr;
use econsim_core::models::{Deductions, ExpenseItem, GstCategory, Regime, default_monthly_basket};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

#[test]
fn salaried_twelve_lakh_pays_nothing_under_the_new_regime() {
    let result = compute_new_regime_tax(dec!(1200000), true);

    assert_eq!(result.taxable_income, dec!(1125000));
    assert_eq!(result.slab_tax, dec!(52500));
    assert_eq!(result.total_tax, dec!(0));
    assert_eq!(result.net_income, dec!(1200000));
}

#[test]
fn salaried_twenty_lakh_full_breakdown() {
    let result = compute_new_regime_tax(dec!(2000000), true);

    assert_eq!(result.taxable_income, dec!(1925000));
    assert_eq!(result.slab_tax, dec!(185000));
    assert_eq!(result.cess, dec!(7400));
    assert_eq!(result.total_tax, dec!(192400));
    assert_eq!(result.effective_rate, dec!(9.62));
}

#[test]
fn small_basket_gst_back_calculation() {
    let items = vec![
        ExpenseItem::with_rate("Medicines", GstCategory::Essential, dec!(1000), dec!(0.05)),
        ExpenseItem::with_rate("Groceries", GstCategory::Exempt, dec!(2000), dec!(0)),
    ];

    let impact = compute_gst_impact(&items);

    assert_eq!(impact.total_expense, dec!(3000));
    assert_eq!(impact.total_gst, dec!(47.62));
    assert_eq!(impact.effective_gst_rate, dec!(1.59));
}

#[test]
fn deductions_decide_the_regime_verdict_at_fifteen_lakh() {
    let income = dec!(1500000);
    let maxed = Deductions {
        section_80c: dec!(150000),
        section_80d: dec!(50000),
        section_80ccd_1b: dec!(50000),
        home_loan_interest: dec!(200000),
        hra: dec!(0),
    };

    let without = compare_regimes(income, true, &Deductions::default());
    let with = compare_regimes(income, true, &maxed);
    let with_hra = compare_regimes(
        income,
        true,
        &Deductions {
            hra: dec!(200000),
            ..maxed
        },
    );

    // Zero deductions: the old regime is wildly worse.
    assert_eq!(without.better_regime, Regime::New);
    assert_eq!(without.old_regime.total_tax, dec!(257400));

    // Maxed Chapter VI-A: still New, but the gap shrinks from 159900.
    assert_eq!(with.better_regime, Regime::New);
    assert_eq!(with.savings, dec!(19500));

    // Adding an HRA exemption flips the verdict.
    assert_eq!(with_hra.better_regime, Regime::Old);
    assert_eq!(with_hra.savings, dec!(22100));
}

#[test]
fn dashboard_flow_over_the_default_basket() {
    let income = dec!(1800000);
    let comparison = compare_regimes(income, true, &Deductions::default());
    let gst = compute_gst_impact(&default_monthly_basket());

    let adjustments = PolicyAdjustments {
        gst_change_pct: dec!(2),
        income_tax_change_pct: dec!(0),
        fuel_tax_change_per_litre: dec!(2),
        monthly_subsidy: dec!(500),
    };
    let policy = simulate_policy(&adjustments, &gst, &comparison.new_regime);

    // The sandbox composes the same numbers the dashboard displays.
    assert_eq!(
        policy.net_monthly_impact,
        policy.gst_impact + policy.income_tax_impact + policy.fuel_impact
            - policy.subsidy_benefit
    );
    assert_eq!(policy.fuel_impact, dec!(200));

    let inflation = project_personal_inflation(
        gst.total_expense,
        false,
        &InflationAssumptions::current(),
    );
    assert!(inflation.extra_monthly_cost > dec!(0));
    assert!(inflation.personal_inflation_rate > dec!(2));
    assert!(inflation.personal_inflation_rate < dec!(8));
}

#[test]
fn budget_changes_since_2023_zeroed_the_tax_on_ten_lakh() {
    let comparison = compare_across_years(dec!(1000000), true);

    let taxes: Vec<_> = comparison
        .yearly
        .iter()
        .map(|y| (y.year.as_str(), y.computation.total_tax))
        .collect();
    assert_eq!(
        taxes,
        vec![
            ("FY 2023-24", dec!(54600)),
            ("FY 2024-25", dec!(44200)),
            ("FY 2025-26", dec!(0)),
        ]
    );
    assert_eq!(comparison.savings_vs_2023, dec!(54600));
    assert_eq!(comparison.percent_savings, dec!(100.00));

    // The current year's figure is the same one the regime comparison shows.
    let current = &comparison.yearly[FiscalYear::ALL.len() - 1].computation;
    assert_eq!(
        current,
        &compare_regimes(dec!(1000000), true, &Deductions::default()).new_regime
    );
}

#[test]
fn displayed_figures_use_indian_units() {
    let result = compute_new_regime_tax(dec!(2000000), true);

    assert_eq!(format_inr(result.gross_income), "₹20.00 L");
    assert_eq!(format_inr(result.total_tax), "₹1.92 L");
    assert_eq!(format_inr(result.cess), "₹7,400");
}

#[test]
fn recomputation_with_identical_inputs_is_bit_identical() {
    let income = dec!(1357900);
    let deductions = Deductions {
        section_80c: dec!(120000),
        hra: dec!(60000),
        ..Deductions::default()
    };

    let first = compare_regimes(income, true, &deductions);
    let second = compare_regimes(income, true, &deductions);

    assert_eq!(first, second);
}
