//! Tower middleware configuration.

mod session;

pub use session::create_session_layer;
