//! Discount resolution and display pricing
use crate::catalog::{Discount, DiscountKind};

/// The resolved price of a product for display and cart accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// Price after an active discount, rounded to 2 decimals.
    pub final_price: f64,
    /// Base price rounded to 2 decimals.
    pub original_price: f64,
    /// Label such as `10% off` or `-$5.00`; `None` without an active discount.
    pub discount_text: Option<String>,
    pub has_discount: bool,
}

/// Round to 2 decimal places for currency display.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resolve a base price and optional discount descriptor into a [`PriceQuote`].
///
/// A discount is only honored when it strictly lowers the rounded final
/// price; otherwise the quote reverts to the base price with no label.
/// Non-finite or negative prices pass through untouched so a malformed
/// record renders as-is instead of being silently repriced.
///
/// Pure and deterministic; calling it on its own output changes nothing.
#[must_use]
pub fn compute_price(price: f64, discount: Option<&Discount>) -> PriceQuote {
    if !price.is_finite() || price < 0.0 {
        return PriceQuote {
            final_price: price,
            original_price: price,
            discount_text: None,
            has_discount: false,
        };
    }

    let original_price = round2(price);
    let passthrough = PriceQuote {
        final_price: original_price,
        original_price,
        discount_text: None,
        has_discount: false,
    };

    let Some(discount) = discount else {
        return passthrough;
    };
    if !discount.value.is_finite() {
        return passthrough;
    }

    let (raw_final, label) = match discount.kind {
        DiscountKind::Percent => {
            if discount.value <= 0.0 || discount.value > 100.0 {
                return passthrough;
            }
            (
                price * (1.0 - discount.value / 100.0),
                format!("{}% off", discount.value),
            )
        }
        DiscountKind::Fixed => {
            if discount.value <= 0.0 {
                return passthrough;
            }
            (
                (price - discount.value).max(0.0),
                format!("-${:.2}", discount.value),
            )
        }
    };

    let final_price = round2(raw_final);
    if final_price >= original_price {
        return passthrough;
    }

    PriceQuote {
        final_price,
        original_price,
        discount_text: Some(label),
        has_discount: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent(value: f64) -> Discount {
        Discount {
            kind: DiscountKind::Percent,
            value,
        }
    }

    fn fixed(value: f64) -> Discount {
        Discount {
            kind: DiscountKind::Fixed,
            value,
        }
    }

    #[test]
    fn ten_percent_off_hundred() {
        let quote = compute_price(100.0, Some(&percent(10.0)));
        assert_eq!(quote.final_price, 90.0);
        assert_eq!(quote.original_price, 100.0);
        assert_eq!(quote.discount_text.as_deref(), Some("10% off"));
        assert!(quote.has_discount);
    }

    #[test]
    fn percent_discounts_round_to_two_decimals() {
        let quote = compute_price(19.99, Some(&percent(33.0)));
        assert_eq!(quote.final_price, round2(19.99 * 0.67));
        assert!(quote.final_price <= 19.99);
        assert!(quote.has_discount);
    }

    #[test]
    fn out_of_range_percent_is_ignored() {
        for value in [0.0, -10.0, 101.0] {
            let quote = compute_price(50.0, Some(&percent(value)));
            assert_eq!(quote.final_price, 50.0);
            assert!(!quote.has_discount);
            assert!(quote.discount_text.is_none());
        }
    }

    #[test]
    fn fixed_discount_floors_at_zero() {
        let quote = compute_price(30.0, Some(&fixed(45.0)));
        assert_eq!(quote.final_price, 0.0);
        assert_eq!(quote.discount_text.as_deref(), Some("-$45.00"));
        assert!(quote.has_discount);
    }

    #[test]
    fn fixed_discount_on_zero_price_is_no_discount() {
        // 0 is not strictly below 0, so the discount is discarded.
        let quote = compute_price(0.0, Some(&fixed(5.0)));
        assert_eq!(quote.final_price, 0.0);
        assert_eq!(quote.original_price, 0.0);
        assert!(!quote.has_discount);
        assert!(quote.discount_text.is_none());
    }

    #[test]
    fn discount_that_rounds_back_to_base_is_discarded() {
        // 0.004 off 10.00 rounds back to 10.00.
        let quote = compute_price(10.0, Some(&percent(0.04)));
        assert_eq!(quote.final_price, 10.0);
        assert!(!quote.has_discount);
    }

    #[test]
    fn invalid_price_passes_through() {
        let quote = compute_price(f64::NAN, Some(&percent(10.0)));
        assert!(quote.final_price.is_nan());
        assert!(!quote.has_discount);
        let quote = compute_price(-1.0, Some(&fixed(1.0)));
        assert_eq!(quote.final_price, -1.0);
        assert!(!quote.has_discount);
    }

    #[test]
    fn final_price_never_exceeds_base_and_flag_matches() {
        for (price, discount) in [
            (100.0, Some(percent(10.0))),
            (100.0, Some(percent(100.0))),
            (19.99, Some(fixed(5.0))),
            (19.99, Some(fixed(0.0))),
            (0.0, None),
            (7.5, None),
        ] {
            let quote = compute_price(price, discount.as_ref());
            assert!(quote.final_price <= quote.original_price);
            assert_eq!(quote.has_discount, quote.final_price < quote.original_price);
        }
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let first = compute_price(100.0, Some(&percent(10.0)));
        let again = compute_price(first.final_price, None);
        assert_eq!(again.final_price, first.final_price);
        assert!(!again.has_discount);
    }
}
