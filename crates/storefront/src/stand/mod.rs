//! Snack stand API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest`: `GET /stock` for availability and allergy
//!   metadata, `POST /order` to record orders
//! - The stand is source of truth for inventory - no local sync, stock is
//!   re-fetched whenever the listing is rendered
//! - Orders are serialized per the configured [`SubmissionStrategy`]: one
//!   JSON request for the whole cart (aggregate, the default) or one
//!   form-encoded request per unit of quantity (per-unit, for legacy stands)
//!
//! # Example
//!
//! ```rust,ignore
//! use snackwatch_storefront::stand::{OrderTicket, StandClient};
//!
//! let client = StandClient::new(&config.stand)?;
//!
//! let stock = client.get_stock().await?;
//!
//! let ticket = OrderTicket::new(cart.clone(), name, PickupMethod::Pickup);
//! client.place_order(&ticket).await?;
//! ```

mod client;
pub mod types;

pub use client::StandClient;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the stand API.
#[derive(Debug, Error)]
pub enum StandError {
    /// HTTP request failed (transport error or timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The stand rejected the request and provided a message.
    #[error("rejected by stand: {0}")]
    Rejected(String),

    /// Non-success status with no parseable message in the body.
    #[error("stand API returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// A per-unit order task could not be joined.
    #[error("order task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The configured stand base URL cannot form an endpoint URL.
    #[error("invalid stand URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl StandError {
    /// The message to surface to the user.
    ///
    /// Server-provided rejection messages are shown verbatim; everything
    /// else collapses to a generic failure string (details go to the logs).
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            _ => "Order failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let err = StandError::Rejected("Out of stock".to_string());
        assert_eq!(err.to_string(), "rejected by stand: Out of stock");
    }

    #[test]
    fn test_user_message_passes_rejection_through_verbatim() {
        let err = StandError::Rejected("Out of stock".to_string());
        assert_eq!(err.user_message(), "Out of stock");
    }

    #[test]
    fn test_user_message_is_generic_for_other_errors() {
        let err = StandError::Status(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(err.user_message(), "Order failed");
    }
}
