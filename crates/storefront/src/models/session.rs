//! Session-held cart state.
//!
//! The cart lives in the visitor's session and nowhere else: it starts empty
//! at session start, is mutated only through the cart routes, and is cleared
//! exactly once per successful checkout. Nothing is persisted beyond the
//! in-memory session store.

use tower_sessions::Session;

use snackwatch_core::Cart;

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the visitor's cart.
    pub const CART: &str = "cart";
}

/// Load the cart from the session, defaulting to an empty cart.
///
/// A session read failure is treated as an empty cart rather than an error:
/// the visitor can always rebuild their cart, and the failure is logged.
pub async fn load_cart(session: &Session) -> Cart {
    match session.get::<Cart>(keys::CART).await {
        Ok(cart) => cart.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to load cart from session: {e}");
            Cart::default()
        }
    }
}

/// Store the cart in the session.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}
