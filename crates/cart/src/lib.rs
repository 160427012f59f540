//! GoMarketplace Cart - cart state and persistence.
//!
//! This crate is the state-and-persistence unit behind the mobile app's
//! shopping cart. The UI layer only reads snapshots and invokes the mutation
//! operations; everything else (rendering, catalog, checkout) lives outside.
//!
//! # Architecture
//!
//! - [`storage`] - string key-value backends (file-backed and in-memory)
//! - [`persist`] - the serialized copy of the cart (fixed key + JSON codec)
//! - [`store`] - the authoritative in-memory list and its write worker
//! - [`scope`] - the access scope handed to the UI subtree
//! - [`config`] - environment-driven configuration
//!
//! The in-memory list is the single source of truth. Every mutation updates
//! it immediately and schedules exactly one write of the post-mutation list
//! through a serialized background worker, so the persisted copy always
//! converges to the last applied mutation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod persist;
pub mod scope;
pub mod storage;
pub mod store;

pub use config::{CartConfig, ConfigError, PersistenceMode};
pub use persist::{CART_STORAGE_KEY, PersistedStore};
pub use scope::{CartAccess, CartScope, ScopeError};
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};
pub use store::CartStore;
