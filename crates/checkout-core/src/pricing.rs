//! # Pricing
//!
//! Shipping derivation and the final payable total. Everything is exact
//! `i64` VND arithmetic; locale formatting lives in `format_vnd` only.

use serde::{Deserialize, Serialize};

/// Orders strictly above this subtotal ship free
pub const FREE_SHIPPING_THRESHOLD: i64 = 1_000_000;

/// Flat shipping fee below the threshold
pub const FLAT_SHIPPING_FEE: i64 = 30_000;

/// Shipping cost for a subtotal. The threshold is exclusive: exactly
/// 1 000 000 still pays the flat fee.
pub fn shipping_cost(subtotal: i64) -> i64 {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        0
    } else {
        FLAT_SHIPPING_FEE
    }
}

/// Subtotal, shipping, and grand total for one checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub subtotal: i64,
    pub shipping: i64,
    pub total: i64,
}

impl PriceQuote {
    pub fn is_free_shipping(&self) -> bool {
        self.shipping == 0
    }
}

/// Derive the full quote from a subtotal
pub fn quote(subtotal: i64) -> PriceQuote {
    let shipping = shipping_cost(subtotal);
    PriceQuote {
        subtotal,
        shipping,
        total: subtotal + shipping,
    }
}

/// Format a VND amount for display, e.g. `1.250.000 ₫`
pub fn format_vnd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        grouped.insert(0, '-');
    }
    grouped.push_str(" ₫");
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(shipping_cost(1_000_000), FLAT_SHIPPING_FEE);
        assert_eq!(shipping_cost(1_000_001), 0);
    }

    #[test]
    fn test_small_order_pays_flat_fee() {
        let quote = quote(500_000);
        assert_eq!(quote.shipping, 30_000);
        assert_eq!(quote.total, 530_000);
        assert!(!quote.is_free_shipping());
    }

    #[test]
    fn test_large_order_ships_free() {
        let quote = quote(2_000_000);
        assert_eq!(quote.shipping, 0);
        assert_eq!(quote.total, 2_000_000);
        assert!(quote.is_free_shipping());
    }

    #[test]
    fn test_empty_order_quote() {
        // An empty order never reaches submission, but the quote is still
        // well-defined.
        let quote = quote(0);
        assert_eq!(quote.total, FLAT_SHIPPING_FEE);
    }

    #[test]
    fn test_format_vnd_grouping() {
        assert_eq!(format_vnd(0), "0 ₫");
        assert_eq!(format_vnd(30_000), "30.000 ₫");
        assert_eq!(format_vnd(1_250_000), "1.250.000 ₫");
        assert_eq!(format_vnd(999), "999 ₫");
        assert_eq!(format_vnd(-5_000), "-5.000 ₫");
    }
}
