//! Access scope for the UI boundary.
//!
//! The store itself is a plain value meant to be injected explicitly into
//! consumers and tests. [`CartScope`] is the thin wrapper kept only for the
//! one collaborator that cannot take constructor arguments, the UI subtree:
//! [`provide`](CartScope::provide) builds the store once per scope lifetime
//! and [`access`](CartScope::access) hands out the current view, failing for
//! any consumer outside a provided scope.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use go_marketplace_core::{CartItem, NewCartItem, ProductId};

use crate::config::PersistenceMode;
use crate::persist::PersistedStore;
use crate::store::CartStore;

/// Scope misuse; the only error the cart API surfaces to consumers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// `access` was called on a scope that `provide` never ran on.
    #[error("cart accessor used outside provided scope")]
    OutOfScope,
}

/// Hands one [`CartStore`] to a bounded subtree of consumers.
///
/// Clones share the same scope; the transition from empty to provided is
/// one-way and happens at most once per scope lifetime.
#[derive(Clone, Default)]
pub struct CartScope {
    store: Arc<OnceCell<CartStore>>,
}

impl CartScope {
    /// An empty scope; [`access`](Self::access) fails until
    /// [`provide`](Self::provide) runs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or reuse) the scope's store and make it available to
    /// everything holding this scope.
    ///
    /// The first call opens the store against `persisted`; later calls
    /// return the same store and their arguments are ignored.
    pub async fn provide(&self, persisted: PersistedStore, mode: PersistenceMode) -> CartStore {
        self.store
            .get_or_init(|| CartStore::open(persisted, mode))
            .await
            .clone()
    }

    /// Current view of the cart for a consumer inside the scope.
    ///
    /// `products` reflects the latest snapshot at the time of access.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::OutOfScope`] when no enclosing `provide` call
    /// exists.
    pub async fn access(&self) -> Result<CartAccess, ScopeError> {
        let store = self.store.get().ok_or(ScopeError::OutOfScope)?.clone();
        let products = store.snapshot().await;
        Ok(CartAccess { products, store })
    }
}

/// What a consumer gets from [`CartScope::access`]: the snapshot taken at
/// access time plus the mutation operations.
pub struct CartAccess {
    products: Vec<CartItem>,
    store: CartStore,
}

impl std::fmt::Debug for CartAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartAccess")
            .field("products", &self.products)
            .finish_non_exhaustive()
    }
}

impl CartAccess {
    /// Cart contents as of the `access` call, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[CartItem] {
        &self.products
    }

    /// See [`CartStore::add`].
    pub async fn add_to_cart(&self, item: NewCartItem) {
        self.store.add(item).await;
    }

    /// See [`CartStore::increment`].
    pub async fn increment(&self, id: &ProductId) {
        self.store.increment(id).await;
    }

    /// See [`CartStore::decrement`].
    pub async fn decrement(&self, id: &ProductId) {
        self.store.decrement(id).await;
    }
}
