//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Stock listing, cart summary, checkout dialog area
//! GET  /health            - Health check
//!
//! # Cart (HTMX fragments)
//! POST /cart/add          - Add one unit of an item (returns cart_summary fragment)
//! POST /cart/remove       - Remove one unit of an item (returns cart_summary fragment)
//! GET  /cart/summary      - Cart summary fragment (re-rendered on cart-updated)
//!
//! # Checkout
//! GET  /checkout          - Checkout dialog fragment (cart snapshot, reset fields)
//! POST /checkout          - Submit the order
//! GET  /checkout/close    - Dismiss the dialog
//! GET  /checkout/complete - Confirmation expiry: re-fetch stock, re-render body
//! ```

pub mod cart;
pub mod checkout;
pub mod stand;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/summary", get(cart::summary))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::open).post(checkout::submit))
        .route("/close", get(checkout::close))
        .route("/complete", get(checkout::complete))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Stock listing page
        .route("/", get(stand::home))
        // Cart fragments
        .nest("/cart", cart_routes())
        // Checkout dialog and submission
        .nest("/checkout", checkout_routes())
}
