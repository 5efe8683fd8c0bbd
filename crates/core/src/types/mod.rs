//! Validated domain types.
//!
//! Newtype wrappers and enums with parse-time validation, mirroring the
//! convention that invalid states are rejected at the boundary rather than
//! checked ad hoc downstream.

mod name;
mod pickup;
mod strategy;

pub use name::{CustomerName, CustomerNameError};
pub use pickup::{PickupMethod, UnknownPickupMethod};
pub use strategy::{StrategyParseError, SubmissionStrategy};
