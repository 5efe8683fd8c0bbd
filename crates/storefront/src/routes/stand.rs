//! Stock listing page and shared view types.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::session::load_cart;
use crate::routes::cart::CartSummaryView;
use crate::stand::StockMap;
use crate::state::AppState;

/// Stock item display data for templates.
#[derive(Clone)]
pub struct StockItemView {
    pub name: String,
    pub stock: u32,
    /// Comma-joined allergy disclosures, or "None" when the item has none.
    pub allergy_line: String,
    /// When true, the add-to-cart action is disabled.
    pub out_of_stock: bool,
}

impl StockItemView {
    fn new(name: &str, stock: u32, allergies: &[String]) -> Self {
        let allergy_line = if allergies.is_empty() {
            "None".to_string()
        } else {
            allergies.join(", ")
        };
        Self {
            name: name.to_owned(),
            stock,
            allergy_line,
            out_of_stock: stock == 0,
        }
    }
}

/// Build the stock listing views from a fetched stock map.
#[must_use]
pub fn stock_views(stock: &StockMap) -> Vec<StockItemView> {
    stock
        .iter()
        .map(|(name, entry)| StockItemView::new(name, entry.stock, &entry.allergies))
        .collect()
}

/// Full page template.
#[derive(Template, WebTemplate)]
#[template(path = "stand/index.html")]
pub struct IndexTemplate {
    pub stock: Vec<StockItemView>,
    pub cart: CartSummaryView,
}

/// Stand body fragment: stock listing + cart summary + empty dialog area.
///
/// Swapped in whole after the confirmation notice expires, which is also
/// what re-fetches stock after a successful checkout.
#[derive(Template, WebTemplate)]
#[template(path = "partials/stand_body.html")]
pub struct StandBodyTemplate {
    pub stock: Vec<StockItemView>,
    pub cart: CartSummaryView,
}

/// Display the stock listing page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<IndexTemplate> {
    let stock = state.stand().get_stock().await?;
    let cart = load_cart(&session).await;

    Ok(IndexTemplate {
        stock: stock_views(&stock),
        cart: CartSummaryView::from(&cart),
    })
}
