//! SnackWatch Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod stand;
pub mod state;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use state::AppState;

/// Build the full application router: routes, static files, and the session
/// layer. Used by the binary and by integration tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(middleware::create_session_layer())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the stand API.
async fn health() -> &'static str {
    "ok"
}
