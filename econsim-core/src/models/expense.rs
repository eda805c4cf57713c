//! Expense line items and the GST rate categories they fall under.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GST rate bucket a good or service falls under.
///
/// Rates are the nominal statutory fractions; `SinGoods` carries the proposed
/// 40% demerit rate on tobacco, aerated drinks and pan masala.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstCategory {
    Exempt,
    Essential,
    StandardLow,
    StandardHigh,
    Luxury,
    SinGoods,
}

impl GstCategory {
    /// Nominal GST rate for this category, as a fraction.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Exempt => Decimal::ZERO,
            Self::Essential => Decimal::new(5, 2),
            Self::StandardLow => Decimal::new(12, 2),
            Self::StandardHigh => Decimal::new(18, 2),
            Self::Luxury => Decimal::new(28, 2),
            Self::SinGoods => Decimal::new(40, 2),
        }
    }

    /// Human-readable label with the rate spelled out.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exempt => "Exempt (0%)",
            Self::Essential => "Essential (5%)",
            Self::StandardLow => "Standard (12%)",
            Self::StandardHigh => "Standard (18%)",
            Self::Luxury => "Luxury (28%)",
            Self::SinGoods => "Sin Goods (40%)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exempt => "exempt",
            Self::Essential => "essential",
            Self::StandardLow => "standard_low",
            Self::StandardHigh => "standard_high",
            Self::Luxury => "luxury",
            Self::SinGoods => "sin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "exempt" => Some(Self::Exempt),
            "essential" => Some(Self::Essential),
            "standard_low" => Some(Self::StandardLow),
            "standard_high" => Some(Self::StandardHigh),
            "luxury" => Some(Self::Luxury),
            "sin" => Some(Self::SinGoods),
            _ => None,
        }
    }
}

/// A monthly expense line item.
///
/// `amount` is the tax-inclusive price the consumer already pays; the GST
/// embedded in it is recovered by back-calculation, never by multiplying the
/// rate onto the inclusive amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub name: String,
    pub category: GstCategory,
    pub amount: Decimal,
    /// Nominal GST rate as a fraction. Usually the category rate, but kept
    /// separate so sandbox scenarios can override it per item.
    pub gst_rate: Decimal,
}

impl ExpenseItem {
    /// Creates an item taxed at its category's nominal rate.
    pub fn new(name: impl Into<String>, category: GstCategory, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            category,
            amount,
            gst_rate: category.rate(),
        }
    }

    /// Creates an item with an explicit rate override.
    pub fn with_rate(
        name: impl Into<String>,
        category: GstCategory,
        amount: Decimal,
        gst_rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            amount,
            gst_rate,
        }
    }
}

/// The default urban-household monthly basket the simulator starts from.
///
/// Petrol and diesel sit in the exempt bucket because motor fuel is outside
/// GST (it is taxed through excise and VAT instead).
pub fn default_monthly_basket() -> Vec<ExpenseItem> {
    let item = |name: &str, category: GstCategory, amount: i64| {
        ExpenseItem::new(name, category, Decimal::from(amount))
    };
    vec![
        item("Groceries (Fresh)", GstCategory::Exempt, 5_000),
        item("Rent/Maintenance", GstCategory::Exempt, 15_000),
        item("Medicines", GstCategory::Essential, 1_500),
        item("Mobile & Data", GstCategory::StandardHigh, 1_000),
        item("Dining Out & Delivery", GstCategory::StandardHigh, 3_000),
        item("Electronics/Gadgets", GstCategory::StandardHigh, 2_000),
        item("Clothes (Branded)", GstCategory::StandardLow, 2_500),
        item("Petrol/Diesel", GstCategory::Exempt, 4_000),
        item("Movies/OTT", GstCategory::StandardHigh, 500),
        item("Vacation/Hotel", GstCategory::Luxury, 5_000),
        item("Air Conditioner/Fridge", GstCategory::Luxury, 2_000),
        item("Car EMI/Maintenance", GstCategory::Luxury, 0),
    ]
}
