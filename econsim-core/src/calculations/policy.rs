//! What-if sandbox: projects the monthly cost of hypothetical policy moves
//! onto a household's own numbers.
//!
//! The sliders adjust four levers at once: a GST rate change applied to the
//! household's current embedded GST, an income-tax change applied to the
//! annual liability (spread over twelve months), a per-litre fuel levy, and
//! a direct monthly subsidy credited back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::calculations::gst::GstImpact;
use crate::calculations::income_tax::TaxComputation;

/// Assumed household fuel consumption, litres per month, for the fuel levy
/// projection.
pub const ASSUMED_MONTHLY_FUEL_LITRES: Decimal = Decimal::ONE_HUNDRED;

/// Slider positions for one scenario.
///
/// Percentage fields are in percentage points (`2` means "+2%"), the fuel
/// change is in rupees per litre, and the subsidy is rupees per month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyAdjustments {
    pub gst_change_pct: Decimal,
    pub income_tax_change_pct: Decimal,
    pub fuel_tax_change_per_litre: Decimal,
    pub monthly_subsidy: Decimal,
}

/// Projected monthly impact of one scenario, broken down by lever.
///
/// Positive figures are extra cost to the household; the subsidy is reported
/// as the positive benefit that gets subtracted from the net.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyImpact {
    pub gst_impact: Decimal,
    pub income_tax_impact: Decimal,
    pub fuel_impact: Decimal,
    pub subsidy_benefit: Decimal,
    pub net_monthly_impact: Decimal,
}

/// Projects the monthly impact of the given adjustments onto the household's
/// current GST burden and income-tax liability.
///
/// The GST basket is already monthly; the income-tax liability is annual and
/// is divided by twelve.
pub fn simulate_policy(
    adjustments: &PolicyAdjustments,
    gst: &GstImpact,
    income_tax: &TaxComputation,
) -> PolicyImpact {
    let percent = Decimal::ONE_HUNDRED;
    let months_per_year = Decimal::from(12);

    let gst_impact = round_half_up(gst.total_gst * adjustments.gst_change_pct / percent);
    let income_tax_impact = round_half_up(
        income_tax.total_tax * adjustments.income_tax_change_pct / percent / months_per_year,
    );
    let fuel_impact = round_half_up(
        adjustments.fuel_tax_change_per_litre * ASSUMED_MONTHLY_FUEL_LITRES,
    );
    let subsidy_benefit = adjustments.monthly_subsidy;

    let net_monthly_impact =
        round_half_up(gst_impact + income_tax_impact + fuel_impact - subsidy_benefit);

    PolicyImpact {
        gst_impact,
        income_tax_impact,
        fuel_impact,
        subsidy_benefit,
        net_monthly_impact,
    }
}
