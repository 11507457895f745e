//! Cart ledger and order totals
use crate::pricing::round2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single line in the cart, keyed externally by product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLine {
    /// A line is valid when it has at least one unit at a sane price.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.quantity >= 1 && self.unit_price.is_finite() && self.unit_price >= 0.0
    }
}

/// Aggregates produced by the validation sweep.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    /// Sum of quantities across all valid lines.
    pub item_count: u32,
    /// Sum of `unit_price * quantity`, rounded to 2 decimals.
    pub grand_total: f64,
}

/// Rejected add-to-cart input. The UI surfaces these as a user alert;
/// the ledger itself is untouched on rejection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("product id is missing")]
    MissingId,
    #[error("product name is missing")]
    MissingName,
    #[error("product price is not a valid amount")]
    InvalidPrice,
}

/// Mapping of product id to cart line. Keys are kept sorted so that
/// serialization and rendering order are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CartLedger {
    lines: BTreeMap<String, CartLine>,
}

impl CartLedger {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product: increments the quantity when the id is
    /// already present, otherwise inserts a fresh line with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] without mutating the ledger when the id or
    /// name is empty or the price is not a finite non-negative number.
    pub fn add_item(&mut self, id: &str, name: &str, price: f64) -> Result<(), CartError> {
        if id.trim().is_empty() {
            return Err(CartError::MissingId);
        }
        if name.trim().is_empty() {
            return Err(CartError::MissingName);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(CartError::InvalidPrice);
        }
        self.lines
            .entry(id.to_string())
            .and_modify(|line| line.quantity += 1)
            .or_insert_with(|| CartLine {
                name: name.to_string(),
                unit_price: price,
                quantity: 1,
            });
        Ok(())
    }

    /// Remove a line entirely; no-op when the id is absent.
    pub fn remove_item(&mut self, id: &str) {
        self.lines.remove(id);
    }

    /// Validation sweep: drop any line that fails [`CartLine::is_valid`],
    /// then sum the survivors. Running it on an already-clean ledger
    /// changes nothing.
    pub fn recompute(&mut self) -> CartTotals {
        let before = self.lines.len();
        self.lines.retain(|_, line| line.is_valid());
        let dropped = before - self.lines.len();
        if dropped > 0 {
            log::warn!("cart sweep dropped {dropped} invalid line(s)");
        }

        let mut totals = CartTotals::default();
        for line in self.lines.values() {
            totals.item_count += line.quantity;
            totals.grand_total += line.unit_price * f64::from(line.quantity);
        }
        totals.grand_total = round2(totals.grand_total);
        totals
    }

    #[must_use]
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.get(id)
    }

    /// Iterate lines in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CartLine)> {
        self.lines.iter()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Serialize the flat id -> line mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.lines)
    }

    /// Deserialize a persisted cart. Corrupt or non-object payloads yield
    /// the empty ledger so a bad storage value can never break the page.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<BTreeMap<String, CartLine>>(json) {
            Ok(lines) => Self { lines },
            Err(err) => {
                log::warn!("discarding corrupt cart payload: {err}");
                Self::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_add_increments_quantity_only() {
        let mut cart = CartLedger::new();
        cart.add_item("p1", "Widget", 19.99).unwrap();
        cart.add_item("p1", "Widget", 19.99).unwrap();
        assert_eq!(cart.len(), 1);
        let line = cart.line("p1").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, 19.99);
        assert_eq!(line.name, "Widget");
        let totals = cart.recompute();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.grand_total, 39.98);
    }

    #[test]
    fn invalid_input_is_rejected_without_mutation() {
        let mut cart = CartLedger::new();
        assert_eq!(cart.add_item("", "Widget", 1.0), Err(CartError::MissingId));
        assert_eq!(cart.add_item("p1", "  ", 1.0), Err(CartError::MissingName));
        assert_eq!(
            cart.add_item("p1", "Widget", f64::NAN),
            Err(CartError::InvalidPrice)
        );
        assert_eq!(
            cart.add_item("p1", "Widget", -0.01),
            Err(CartError::InvalidPrice)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_is_noop_for_unknown_id() {
        let mut cart = CartLedger::new();
        cart.add_item("p1", "Widget", 5.0).unwrap();
        cart.remove_item("p2");
        assert_eq!(cart.len(), 1);
        cart.remove_item("p1");
        assert!(cart.is_empty());
    }

    #[test]
    fn sweep_drops_invalid_lines_and_is_idempotent() {
        let json = r#"{
            "good": { "name": "Widget", "price": 2.5, "quantity": 2 },
            "zero-qty": { "name": "Gadget", "price": 1.0, "quantity": 0 },
            "bad-price": { "name": "Gizmo", "price": -3.0, "quantity": 1 }
        }"#;
        let mut cart = CartLedger::from_json(json);
        assert_eq!(cart.len(), 3);
        let totals = cart.recompute();
        assert_eq!(cart.len(), 1);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.grand_total, 5.0);

        let snapshot = cart.clone();
        let again = cart.recompute();
        assert_eq!(cart, snapshot);
        assert_eq!(again, totals);
    }

    #[test]
    fn corrupt_json_resets_to_empty() {
        assert!(CartLedger::from_json("not json at all").is_empty());
        assert!(CartLedger::from_json("[1,2,3]").is_empty());
        assert!(CartLedger::from_json("42").is_empty());
    }

    #[test]
    fn json_round_trip_preserves_valid_lines() {
        let mut cart = CartLedger::new();
        cart.add_item("p1", "Widget", 19.99).unwrap();
        cart.add_item("p2", "Mug", 15.0).unwrap();
        cart.add_item("p1", "Widget", 19.99).unwrap();
        let json = cart.to_json().unwrap();
        let reloaded = CartLedger::from_json(&json);
        assert_eq!(reloaded, cart);
    }

    #[test]
    fn totals_round_to_two_decimals() {
        let mut cart = CartLedger::new();
        cart.add_item("a", "A", 0.1).unwrap();
        cart.add_item("b", "B", 0.2).unwrap();
        let totals = cart.recompute();
        assert_eq!(totals.grand_total, 0.3);
    }
}
