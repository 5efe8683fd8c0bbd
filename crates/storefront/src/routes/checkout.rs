//! Checkout route handlers.
//!
//! The checkout dialog is an HTMX fragment swapped into `#checkout-dialog`.
//! Validation failures and stand rejections re-render the dialog with a
//! message and leave the cart untouched; only a fully successful submission
//! clears the cart and shows the confirmation notice. The notice carries a
//! delayed HTMX trigger that re-fetches stock exactly once, three seconds
//! after the order is accepted.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use snackwatch_core::{Cart, CartLine, CustomerName, PickupMethod};

use crate::error::Result;
use crate::models::session::{load_cart, save_cart};
use crate::routes::cart::CartSummaryView;
use crate::routes::stand::{StandBodyTemplate, stock_views};
use crate::stand::OrderTicket;
use crate::state::AppState;

/// One pickup-method choice in the dialog's selector.
#[derive(Clone, Copy)]
pub struct PickupOption {
    pub value: &'static str,
    pub selected: bool,
}

fn pickup_options(selected: PickupMethod) -> Vec<PickupOption> {
    PickupMethod::all()
        .into_iter()
        .map(|method| PickupOption {
            value: method.as_str(),
            selected: method == selected,
        })
        .collect()
}

/// Checkout dialog fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_dialog.html")]
pub struct CheckoutDialogTemplate {
    /// Cart snapshot captured for confirmation display.
    pub lines: Vec<CartLine>,
    /// Validation or submission failure message, shown inside the dialog.
    pub error: Option<String>,
    /// Name field contents; empty on open, preserved on failure.
    pub name_value: String,
    pub pickup_options: Vec<PickupOption>,
}

/// Confirmation notice fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/confirmation.html")]
pub struct ConfirmationTemplate {
    pub name: String,
}

/// Checkout submission form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub pickup_method: String,
}

/// Open the checkout dialog (HTMX).
///
/// Captures the current cart snapshot for confirmation display and resets
/// the form fields to their defaults. Emptiness is not checked here, only
/// at submission.
#[instrument(skip(session))]
pub async fn open(session: Session) -> CheckoutDialogTemplate {
    let cart = load_cart(&session).await;

    CheckoutDialogTemplate {
        lines: cart.snapshot(),
        error: None,
        name_value: String::new(),
        pickup_options: pickup_options(PickupMethod::default()),
    }
}

/// Dismiss the checkout dialog (HTMX).
pub async fn close() -> Html<&'static str> {
    Html(r#"<div id="checkout-dialog"></div>"#)
}

/// Submit the order (HTMX).
///
/// Validates the name and cart before any request is issued, then submits
/// per the configured strategy. On success the cart is cleared and the
/// confirmation notice replaces the dialog; on any failure the dialog is
/// re-rendered with a message and the cart is left exactly as it was.
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let cart = load_cart(&session).await;
    let pickup_method = form.pickup_method.parse().unwrap_or_default();

    // Validation happens before any network request.
    let name = match CustomerName::parse(&form.name) {
        Ok(name) => name,
        Err(e) => return Ok(dialog_with_error(&cart, &form, pickup_method, e.to_string())),
    };

    let Some(ticket) = OrderTicket::new(cart.clone(), name.clone(), pickup_method) else {
        return Ok(dialog_with_error(
            &cart,
            &form,
            pickup_method,
            "Your cart is empty.".to_string(),
        ));
    };

    match state.stand().place_order(&ticket).await {
        Ok(()) => {
            save_cart(&session, &Cart::new()).await?;

            // The cart-updated trigger re-renders the (now empty) summary,
            // which also disables the checkout action.
            Ok((
                AppendHeaders([("HX-Trigger", "cart-updated")]),
                ConfirmationTemplate {
                    name: name.into_inner(),
                },
            )
                .into_response())
        }
        Err(e) => {
            tracing::warn!("Checkout submission failed: {e}");
            Ok(dialog_with_error(
                &cart,
                &form,
                pickup_method,
                e.user_message(),
            ))
        }
    }
}

/// Confirmation expiry (HTMX): hide the notice and re-fetch stock.
///
/// Triggered exactly once, three seconds after a successful submission, by
/// the confirmation notice itself. Re-renders the whole stand body so the
/// listing reflects server-side stock decrements.
#[instrument(skip(state, session))]
pub async fn complete(
    State(state): State<AppState>,
    session: Session,
) -> Result<StandBodyTemplate> {
    let stock = state.stand().get_stock().await?;
    let cart = load_cart(&session).await;

    Ok(StandBodyTemplate {
        stock: stock_views(&stock),
        cart: CartSummaryView::from(&cart),
    })
}

/// Re-render the dialog with a message, preserving the entered fields.
fn dialog_with_error(
    cart: &Cart,
    form: &CheckoutForm,
    pickup_method: PickupMethod,
    message: String,
) -> Response {
    CheckoutDialogTemplate {
        lines: cart.snapshot(),
        error: Some(message),
        name_value: form.name.clone(),
        pickup_options: pickup_options(pickup_method),
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_options_mark_selection() {
        let options = pickup_options(PickupMethod::Table);
        assert_eq!(options.len(), 2);
        for option in options {
            assert_eq!(option.selected, option.value == "Table");
        }
    }

    #[test]
    fn test_default_selection_is_pickup() {
        let options = pickup_options(PickupMethod::default());
        assert!(
            options
                .iter()
                .any(|option| option.value == "Pickup" && option.selected)
        );
    }
}
