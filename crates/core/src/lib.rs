//! SnackWatch Core - Shared domain types.
//!
//! This crate provides the types shared across SnackWatch components:
//! - `storefront` - Server-rendered ordering front end
//!
//! # Architecture
//!
//! The core crate contains only types and invariants - no I/O, no HTTP
//! clients, no rendering. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`cart`] - The in-memory cart store and its quantity invariants
//! - [`types`] - Validated customer names, pickup methods, and the order
//!   submission strategy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartLine};
pub use types::*;
