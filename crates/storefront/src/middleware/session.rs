//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. The session only holds
//! the visitor's cart, which is throwaway state, so an in-memory store is
//! enough: restarting the process empties every cart, exactly like reloading
//! the page emptied the cart in the original client.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "sw_session";

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        // Cart state should not outlive the visit.
        .with_expiry(Expiry::OnSessionEnd)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
