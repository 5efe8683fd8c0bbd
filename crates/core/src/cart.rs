//! The cart store.
//!
//! A cart is a mapping from item name to requested quantity. It is the sole
//! owner of cart mutations: callers go through [`Cart::add`], [`Cart::remove`]
//! and [`Cart::clear`], and read state through [`Cart::snapshot`].
//!
//! ## Invariants
//!
//! - Every entry that exists has quantity >= 1. Decrementing an entry to 0
//!   deletes it; no zero or negative quantities are ever stored.
//! - The cart is serializable so the storefront can keep it in the session.
//!   It is never persisted beyond that.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One line of a cart snapshot: an item and its requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Item name as shown in the stock listing.
    pub item: String,
    /// Requested quantity, always >= 1.
    pub quantity: u32,
}

/// In-memory mapping from item name to requested quantity.
///
/// Created empty at session start, mutated only by [`Cart::add`] and
/// [`Cart::remove`], and cleared exactly once per successful checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<String, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Increment the quantity for `item` by 1, inserting a new entry at
    /// quantity 1 if absent. Always succeeds.
    pub fn add(&mut self, item: &str) {
        self.entries
            .entry(item.to_owned())
            .and_modify(|quantity| *quantity = quantity.saturating_add(1))
            .or_insert(1);
    }

    /// Decrement the quantity for `item` by 1 if present; the entry is
    /// deleted when it reaches 0. A no-op (not an error) if `item` is absent.
    pub fn remove(&mut self, item: &str) {
        if let Some(quantity) = self.entries.get_mut(item) {
            *quantity -= 1;
            if *quantity == 0 {
                self.entries.remove(item);
            }
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Immutable view of the current (item, quantity) pairs, for rendering
    /// and submission.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.entries
            .iter()
            .map(|(item, &quantity)| CartLine {
                item: item.clone(),
                quantity,
            })
            .collect()
    }

    /// Current quantity for `item`, 0 when absent.
    #[must_use]
    pub fn quantity(&self, item: &str) -> u32 {
        self.entries.get(item).copied().unwrap_or(0)
    }

    /// Whether the cart holds no entries. Checkout is disabled iff this
    /// returns true.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct items in the cart.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.entries.values().copied().sum()
    }

    /// The cart as an item -> quantity mapping, for the aggregate order body.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, u32> {
        &self.entries
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.unit_count(), 0);
        assert!(cart.snapshot().is_empty());
    }

    #[test]
    fn test_add_inserts_at_one() {
        let mut cart = Cart::new();
        cart.add("Chips");
        assert_eq!(cart.quantity("Chips"), 1);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_add_increments() {
        let mut cart = Cart::new();
        cart.add("Chips");
        cart.add("Chips");
        cart.add("Chips");
        assert_eq!(cart.quantity("Chips"), 3);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.unit_count(), 3);
    }

    #[test]
    fn test_remove_decrements() {
        let mut cart = Cart::new();
        cart.add("Soda");
        cart.add("Soda");
        cart.remove("Soda");
        assert_eq!(cart.quantity("Soda"), 1);
    }

    #[test]
    fn test_remove_deletes_entry_at_zero() {
        let mut cart = Cart::new();
        cart.add("Soda");
        cart.remove("Soda");
        assert_eq!(cart.quantity("Soda"), 0);
        assert!(cart.is_empty());
        assert!(cart.snapshot().is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add("Chips");
        cart.remove("Candy");
        assert_eq!(cart.quantity("Chips"), 1);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_add_then_remove_restores_prior_snapshot() {
        let mut cart = Cart::new();
        cart.add("Chips");
        cart.add("Candy");
        let before = cart.snapshot();

        cart.add("Candy");
        cart.remove("Candy");
        assert_eq!(cart.snapshot(), before);

        cart.add("Soda");
        cart.remove("Soda");
        assert_eq!(cart.snapshot(), before);
    }

    #[test]
    fn test_no_entry_with_quantity_zero_after_any_sequence() {
        let mut cart = Cart::new();
        let ops: &[(&str, &str)] = &[
            ("add", "Chips"),
            ("add", "Soda"),
            ("remove", "Chips"),
            ("remove", "Chips"),
            ("remove", "Candy"),
            ("add", "Soda"),
            ("remove", "Soda"),
            ("remove", "Soda"),
            ("remove", "Soda"),
            ("add", "Candy"),
        ];
        for (op, item) in ops {
            match *op {
                "add" => cart.add(item),
                _ => cart.remove(item),
            }
            for line in cart.snapshot() {
                assert!(line.quantity >= 1, "entry {} has quantity 0", line.item);
            }
        }
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut cart = Cart::new();
        cart.add("Chips");
        cart.add("Soda");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.unit_count(), 0);
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let mut cart = Cart::new();
        cart.add("Chips");
        let snapshot = cart.snapshot();
        cart.add("Chips");
        assert_eq!(snapshot[0].quantity, 1);
        assert_eq!(cart.quantity("Chips"), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = Cart::new();
        cart.add("Chips");
        cart.add("Chips");
        cart.add("Soda");

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"{"Chips":2,"Soda":1}"#);

        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
