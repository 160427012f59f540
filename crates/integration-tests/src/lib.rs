//! Integration tests for the GoMarketplace cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p go-marketplace-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - End-to-end mutation scenarios through scope and store
//! - `persistence_modes` - Session-only versus persistent startup behavior
//! - `persisted_format` - The stored wire format the mobile app reads

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Once;

/// Install a test tracing subscriber once; later calls are no-ops.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "go_marketplace_cart=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A unique temp path for a backing store file.
#[must_use]
pub fn temp_storage_path() -> PathBuf {
    std::env::temp_dir().join(format!("gomarketplace_it_{}.json", uuid::Uuid::new_v4()))
}
