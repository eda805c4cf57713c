mod deductions;
mod expense;
mod regime;
mod tax_slab;

pub use deductions::Deductions;
pub use expense::{ExpenseItem, GstCategory, default_monthly_basket};
pub use regime::Regime;
pub use tax_slab::{
    SlabScheduleError, TaxSlab, new_regime_slabs_2023, new_regime_slabs_2024,
    new_regime_slabs_2025, old_regime_slabs, validate_schedule,
};
