//! GoMarketplace Core - Shared types library.
//!
//! This crate provides the domain types used across all GoMarketplace cart
//! components:
//! - `cart` - Cart state, persistence, and access scope
//! - `integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no async
//! runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The product id newtype and the cart item types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
