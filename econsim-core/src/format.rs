//! Indian-convention currency display: crore/lakh units and 2-3-2 digit
//! grouping.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Formats a rupee amount the way Indian readers expect it.
///
/// Amounts of a crore (₹1,00,00,000) or more render as `₹X.XX Cr`, a lakh or
/// more as `₹X.XX L`, and smaller amounts as whole rupees with Indian digit
/// grouping. Negative amounts carry a leading minus.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use econsim_core::format::format_inr;
///
/// assert_eq!(format_inr(dec!(12500000)), "₹1.25 Cr");
/// assert_eq!(format_inr(dec!(150000)), "₹1.50 L");
/// assert_eq!(format_inr(dec!(45000)), "₹45,000");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let crore = Decimal::from(10_000_000);
    let lakh = Decimal::from(100_000);

    let prefix = if amount < Decimal::ZERO { "-₹" } else { "₹" };
    let abs = amount.abs();

    if abs >= crore {
        format!("{prefix}{:.2} Cr", round_half_up(abs / crore))
    } else if abs >= lakh {
        format!("{prefix}{:.2} L", round_half_up(abs / lakh))
    } else {
        let rupees = abs.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        format!("{prefix}{}", group_indian(&rupees.to_string()))
    }
}

/// Groups a digit string Indian style: the last three digits together, then
/// pairs (`1234567` -> `12,34,567`).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        pairs.push(pair);
        rest = front;
    }
    pairs.push(rest);

    let mut out = String::new();
    for pair in pairs.iter().rev() {
        out.push_str(pair);
        out.push(',');
    }
    out.push_str(tail);
    out
}
