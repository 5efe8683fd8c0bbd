//! Wire types for the stand API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use snackwatch_core::{Cart, CartLine, CustomerName, PickupMethod};

/// Current availability for one item, as reported by `GET /stock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// Units remaining. 0 means the item cannot be added to the cart.
    pub stock: u32,
    /// Allergy disclosures for the item; absent in the payload means none.
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// The full stock map, item name -> availability.
pub type StockMap = BTreeMap<String, StockEntry>;

/// Everything needed to submit one checkout: the cart contents captured at
/// submission time, plus the customer name and pickup method.
///
/// The ticket owns a copy of the cart, so the session cart can change (or be
/// cleared) without affecting an in-flight submission.
#[derive(Debug, Clone)]
pub struct OrderTicket {
    cart: Cart,
    name: CustomerName,
    pickup_method: PickupMethod,
}

impl OrderTicket {
    /// Capture a submission from a non-empty cart.
    ///
    /// Returns `None` for an empty cart: an empty order must never be
    /// submitted, so it cannot even be represented.
    #[must_use]
    pub fn new(cart: Cart, name: CustomerName, pickup_method: PickupMethod) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }
        Some(Self {
            cart,
            name,
            pickup_method,
        })
    }

    /// The captured cart lines.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.snapshot()
    }

    /// The captured cart as an item -> quantity map.
    #[must_use]
    pub const fn cart_map(&self) -> &BTreeMap<String, u32> {
        self.cart.as_map()
    }

    /// Customer name the order is placed under.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Pickup method for the order.
    #[must_use]
    pub const fn pickup_method(&self) -> PickupMethod {
        self.pickup_method
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.cart.unit_count()
    }
}

/// JSON body for an aggregate order: the whole cart in one request.
#[derive(Debug, Serialize)]
pub(crate) struct AggregateOrderBody<'a> {
    pub cart: &'a BTreeMap<String, u32>,
    pub name: &'a str,
    pub pickup_method: &'a str,
}

/// Form body for a single per-unit order request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct UnitOrderForm {
    pub item: String,
    pub name: String,
    pub pickup_method: &'static str,
}

/// Error body the stand returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiFailure {
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_entry_allergies_default_to_empty() {
        let entry: StockEntry = serde_json::from_str(r#"{"stock": 3}"#).unwrap();
        assert_eq!(entry.stock, 3);
        assert!(entry.allergies.is_empty());
    }

    #[test]
    fn test_stock_map_parses() {
        let json = r#"{
            "Chips": {"stock": 5, "allergies": []},
            "Cookies": {"stock": 0, "allergies": ["gluten", "nuts"]}
        }"#;
        let stock: StockMap = serde_json::from_str(json).unwrap();
        assert_eq!(stock.len(), 2);
        assert_eq!(stock.get("Chips").unwrap().stock, 5);
        assert_eq!(
            stock.get("Cookies").unwrap().allergies,
            vec!["gluten", "nuts"]
        );
    }

    #[test]
    fn test_order_ticket_rejects_empty_cart() {
        let name = CustomerName::parse("Alice").unwrap();
        assert!(OrderTicket::new(Cart::new(), name, PickupMethod::Pickup).is_none());
    }

    #[test]
    fn test_order_ticket_captures_cart_at_submission_time() {
        let mut cart = Cart::new();
        cart.add("Chips");
        cart.add("Chips");

        let name = CustomerName::parse("Alice").unwrap();
        let ticket = OrderTicket::new(cart.clone(), name, PickupMethod::Pickup).unwrap();

        // Clearing the live cart does not touch the captured ticket.
        cart.clear();
        assert_eq!(ticket.unit_count(), 2);
        assert_eq!(ticket.lines()[0].item, "Chips");
    }

    #[test]
    fn test_aggregate_body_shape() {
        let mut cart = Cart::new();
        cart.add("Chips");
        cart.add("Chips");
        let body = AggregateOrderBody {
            cart: cart.as_map(),
            name: "Alice",
            pickup_method: "Pickup",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cart": {"Chips": 2},
                "name": "Alice",
                "pickup_method": "Pickup"
            })
        );
    }
}
