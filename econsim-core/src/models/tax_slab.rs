//! Income tax slab schedules for the Indian new and old regimes.
//!
//! A slab schedule is an ordered, gap-free partition of `[0, ∞)` into income
//! bands, each taxed at a single marginal rate. The built-in schedules
//! ([`new_regime_slabs_2025`], [`old_regime_slabs`] and the historical
//! new-regime tables) are the process-wide constant tables every regime
//! calculation reads from; a tax-year update touches only this file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single income band taxed at one marginal rate.
///
/// `upper_bound` is `None` for the open-ended top band. Only the portion of
/// taxable income falling inside `[lower_bound, upper_bound)` is taxed at
/// `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// Errors reported by [`validate_schedule`] for malformed slab schedules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlabScheduleError {
    /// The schedule contains no slabs.
    #[error("slab schedule is empty")]
    Empty,

    /// The first slab does not start at zero.
    #[error("first slab must start at zero, got {0}")]
    DoesNotStartAtZero(Decimal),

    /// A slab does not begin where the previous slab ends.
    #[error("slab starting at {lower} does not begin where the previous slab ends ({expected})")]
    Gap { expected: Decimal, lower: Decimal },

    /// A slab's upper bound is at or below its lower bound.
    #[error("slab starting at {lower} has upper bound {upper} at or below its lower bound")]
    EmptyBand { lower: Decimal, upper: Decimal },

    /// A slab rate is outside `[0, 1]`.
    #[error("slab rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// An open-ended slab appears before the final position.
    #[error("non-final slab starting at {0} must have an upper bound")]
    UnboundedInnerSlab(Decimal),

    /// The final slab has an upper bound, leaving high incomes uncovered.
    #[error("final slab starting at {0} must be open-ended")]
    BoundedFinalSlab(Decimal),
}

/// Checks that a slab schedule is an ordered, gap-free, non-overlapping
/// partition of `[0, ∞)` with rates in `[0, 1]`.
///
/// The built-in schedules satisfy this by construction; callers supplying
/// their own tables (e.g. a what-if sandbox with alternative slabs) should
/// validate before handing them to a calculator.
///
/// # Errors
///
/// Returns [`SlabScheduleError`] naming the first violation found.
pub fn validate_schedule(slabs: &[TaxSlab]) -> Result<(), SlabScheduleError> {
    let Some(first) = slabs.first() else {
        return Err(SlabScheduleError::Empty);
    };
    if first.lower_bound != Decimal::ZERO {
        return Err(SlabScheduleError::DoesNotStartAtZero(first.lower_bound));
    }

    let mut expected_lower = Decimal::ZERO;
    for (index, slab) in slabs.iter().enumerate() {
        if slab.lower_bound != expected_lower {
            return Err(SlabScheduleError::Gap {
                expected: expected_lower,
                lower: slab.lower_bound,
            });
        }
        if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
            return Err(SlabScheduleError::InvalidRate(slab.rate));
        }

        let is_last = index == slabs.len() - 1;
        match slab.upper_bound {
            Some(upper) => {
                if upper <= slab.lower_bound {
                    return Err(SlabScheduleError::EmptyBand {
                        lower: slab.lower_bound,
                        upper,
                    });
                }
                if is_last {
                    return Err(SlabScheduleError::BoundedFinalSlab(slab.lower_bound));
                }
                expected_lower = upper;
            }
            None => {
                if !is_last {
                    return Err(SlabScheduleError::UnboundedInnerSlab(slab.lower_bound));
                }
            }
        }
    }

    Ok(())
}

fn slab(lower: i64, upper: Option<i64>, rate_percent: i64) -> TaxSlab {
    TaxSlab {
        lower_bound: Decimal::from(lower),
        upper_bound: upper.map(Decimal::from),
        rate: Decimal::new(rate_percent, 2),
    }
}

/// The FY 2023-24 new regime schedule: six bands at 3/6/9/12/15 lakh, top
/// marginal rate 30%. Kept for year-over-year comparisons.
pub fn new_regime_slabs_2023() -> Vec<TaxSlab> {
    vec![
        slab(0, Some(300_000), 0),
        slab(300_000, Some(600_000), 5),
        slab(600_000, Some(900_000), 10),
        slab(900_000, Some(1_200_000), 15),
        slab(1_200_000, Some(1_500_000), 20),
        slab(1_500_000, None, 30),
    ]
}

/// The FY 2024-25 new regime schedule: the 5% band widened to 7 lakh, the
/// 10% band ending at 10 lakh. Kept for year-over-year comparisons.
pub fn new_regime_slabs_2024() -> Vec<TaxSlab> {
    vec![
        slab(0, Some(300_000), 0),
        slab(300_000, Some(700_000), 5),
        slab(700_000, Some(1_000_000), 10),
        slab(1_000_000, Some(1_200_000), 15),
        slab(1_200_000, Some(1_500_000), 20),
        slab(1_500_000, None, 30),
    ]
}

/// The FY 2025-26 new regime schedule: seven bands at 4/8/12/16/20/24 lakh,
/// top marginal rate 30%.
pub fn new_regime_slabs_2025() -> Vec<TaxSlab> {
    vec![
        slab(0, Some(400_000), 0),
        slab(400_000, Some(800_000), 5),
        slab(800_000, Some(1_200_000), 10),
        slab(1_200_000, Some(1_600_000), 15),
        slab(1_600_000, Some(2_000_000), 20),
        slab(2_000_000, Some(2_400_000), 25),
        slab(2_400_000, None, 30),
    ]
}

/// The old regime schedule: four bands at 2.5/5/10 lakh, top marginal
/// rate 30%.
pub fn old_regime_slabs() -> Vec<TaxSlab> {
    vec![
        slab(0, Some(250_000), 0),
        slab(250_000, Some(500_000), 5),
        slab(500_000, Some(1_000_000), 20),
        slab(1_000_000, None, 30),
    ]
}
