//! Old regime deduction record with statutory caps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Deductions claimable under the old regime only.
///
/// Each capped field is clamped to `[0, cap]` before use; the new regime
/// ignores this record entirely. HRA exemption has no statutory cap here
/// because the actual limit depends on rent paid and city class, which the
/// caller is expected to have already applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Section 80C investments (PF, ELSS, life insurance premiums, ...).
    pub section_80c: Decimal,

    /// Section 80D health insurance premiums.
    pub section_80d: Decimal,

    /// Section 80CCD(1B) additional NPS contribution.
    pub section_80ccd_1b: Decimal,

    /// Home loan interest under Section 24(b).
    pub home_loan_interest: Decimal,

    /// House rent allowance exemption, uncapped.
    pub hra: Decimal,
}

impl Deductions {
    /// Statutory cap on Section 80C, ₹1,50,000.
    pub const SECTION_80C_CAP: Decimal = Decimal::from_parts(150_000, 0, 0, false, 0);

    /// Statutory cap on Section 80D, ₹50,000.
    pub const SECTION_80D_CAP: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

    /// Statutory cap on Section 80CCD(1B), ₹50,000.
    pub const SECTION_80CCD_1B_CAP: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

    /// Statutory cap on home loan interest, ₹2,00,000.
    pub const HOME_LOAN_INTEREST_CAP: Decimal = Decimal::from_parts(200_000, 0, 0, false, 0);

    /// Sums all fields after clamping each to its statutory cap.
    ///
    /// Negative fields are treated as invalid input and clamped to zero with
    /// a warning; amounts above a cap are silently capped, matching how the
    /// statute ignores the excess.
    pub fn clamped_total(&self) -> Decimal {
        clamp_field("section_80c", self.section_80c, Some(Self::SECTION_80C_CAP))
            + clamp_field("section_80d", self.section_80d, Some(Self::SECTION_80D_CAP))
            + clamp_field(
                "section_80ccd_1b",
                self.section_80ccd_1b,
                Some(Self::SECTION_80CCD_1B_CAP),
            )
            + clamp_field(
                "home_loan_interest",
                self.home_loan_interest,
                Some(Self::HOME_LOAN_INTEREST_CAP),
            )
            + clamp_field("hra", self.hra, None)
    }
}

fn clamp_field(field: &str, value: Decimal, cap: Option<Decimal>) -> Decimal {
    if value < Decimal::ZERO {
        warn!(field, value = %value, "negative deduction treated as zero");
        return Decimal::ZERO;
    }
    match cap {
        Some(cap) if value > cap => cap,
        _ => value,
    }
}
