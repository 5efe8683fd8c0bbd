//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session; every mutation responds with the
//! re-rendered cart summary fragment, which is what enables or disables the
//! checkout action.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use snackwatch_core::{Cart, CartLine};

use crate::error::Result;
use crate::models::session::{load_cart, save_cart};

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartSummaryView {
    pub lines: Vec<CartLine>,
    /// Mirrors the cart emptiness; checkout is disabled iff this is true.
    pub is_empty: bool,
}

impl From<&Cart> for CartSummaryView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.snapshot(),
            is_empty: cart.is_empty(),
        }
    }
}

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub item: String,
}

/// Cart summary fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_summary.html")]
pub struct CartSummaryTemplate {
    pub cart: CartSummaryView,
}

/// Add one unit of an item to the cart (HTMX).
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<CartItemForm>) -> Result<CartSummaryTemplate> {
    let mut cart = load_cart(&session).await;
    cart.add(&form.item);
    save_cart(&session, &cart).await?;

    Ok(CartSummaryTemplate {
        cart: CartSummaryView::from(&cart),
    })
}

/// Remove one unit of an item from the cart (HTMX).
///
/// A no-op when the item is not in the cart.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Form(form): Form<CartItemForm>,
) -> Result<CartSummaryTemplate> {
    let mut cart = load_cart(&session).await;
    cart.remove(&form.item);
    save_cart(&session, &cart).await?;

    Ok(CartSummaryTemplate {
        cart: CartSummaryView::from(&cart),
    })
}

/// Cart summary fragment (HTMX), re-rendered on the `cart-updated` event.
#[instrument(skip(session))]
pub async fn summary(session: Session) -> CartSummaryTemplate {
    let cart = load_cart(&session).await;

    CartSummaryTemplate {
        cart: CartSummaryView::from(&cart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_view_empty_cart() {
        let view = CartSummaryView::from(&Cart::new());
        assert!(view.is_empty);
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_summary_view_tracks_lines() {
        let mut cart = Cart::new();
        cart.add("Chips");
        cart.add("Chips");
        cart.add("Soda");

        let view = CartSummaryView::from(&cart);
        assert!(!view.is_empty);
        assert_eq!(view.lines.len(), 2);
        assert!(
            view.lines
                .iter()
                .any(|line| line.item == "Chips" && line.quantity == 2)
        );
    }
}
