//! The authoritative in-memory cart.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock, mpsc, oneshot};

use go_marketplace_core::{CartItem, NewCartItem, ProductId};

use crate::config::{CartConfig, PersistenceMode};
use crate::persist::PersistedStore;
use crate::storage::{FileBackend, StorageError};

/// Listener invoked with the new snapshot after each mutation.
pub type Listener = Box<dyn Fn(&[CartItem]) + Send + Sync>;

enum WriterMessage {
    Persist(Vec<CartItem>),
    Flush(oneshot::Sender<()>),
}

/// Authoritative ordered list of cart items.
///
/// Cheaply cloneable; all clones share the same list. Mutations update the
/// list immediately and schedule exactly one write of the post-mutation list
/// through a background worker that saves strictly in schedule order, so the
/// persisted copy converges to the last applied mutation.
///
/// There is no removal operation: quantities grow via [`add`](Self::add) and
/// [`increment`](Self::increment) and floor at 1 via
/// [`decrement`](Self::decrement). That is the cart's contract, not a gap.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    items: RwLock<Vec<CartItem>>,
    subscribers: Mutex<Vec<Listener>>,
    writer: mpsc::UnboundedSender<WriterMessage>,
}

impl CartStore {
    /// Open the cart against its persisted copy.
    ///
    /// This is the one-time initialization step; a `CartStore` cannot exist
    /// uninitialized, so no mutation can ever precede it. In
    /// [`PersistenceMode::SessionOnly`] the medium is wiped before the load,
    /// so the read never observes a previous session's cart; in
    /// [`PersistenceMode::Persistent`] the wipe is skipped and the persisted
    /// list is restored.
    ///
    /// Storage failures and corrupt data degrade to an empty cart with a
    /// warning; opening never fails.
    pub async fn open(persisted: PersistedStore, mode: PersistenceMode) -> Self {
        if mode == PersistenceMode::SessionOnly {
            if let Err(err) = persisted.clear_all().await {
                tracing::warn!(error = %err, "failed to wipe storage medium on startup");
            }
        }

        let items = match persisted.load_items().await {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read persisted cart, starting empty");
                Vec::new()
            }
        };

        tracing::info!(?mode, items = items.len(), "cart store opened");

        let (writer, receiver) = mpsc::unbounded_channel();
        tokio::spawn(write_worker(persisted, receiver));

        Self {
            inner: Arc::new(CartStoreInner {
                items: RwLock::new(items),
                subscribers: Mutex::new(Vec::new()),
                writer,
            }),
        }
    }

    /// Open the cart described by `config`, with a file-backed medium.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing file cannot be opened; from
    /// there on the degradation rules of [`open`](Self::open) apply.
    pub async fn from_config(config: &CartConfig) -> Result<Self, StorageError> {
        let backend = FileBackend::open(&config.storage_path).await?;
        Ok(Self::open(PersistedStore::new(Arc::new(backend)), config.persistence).await)
    }

    /// Add `item` to the cart.
    ///
    /// An entry with the same id keeps its position and every pre-existing
    /// field and gains one quantity; the fields supplied here are discarded
    /// for it. A fresh id is appended with quantity 1. Schedules one
    /// persistence write of the resulting list.
    pub async fn add(&self, item: NewCartItem) {
        let snapshot = {
            let mut items = self.inner.items.write().await;
            match items.iter_mut().find(|entry| entry.id == item.id) {
                Some(entry) => entry.quantity += 1,
                None => items.push(item.into_cart_item()),
            }
            items.clone()
        };
        self.after_mutation(snapshot).await;
    }

    /// Raise the quantity of the entry matching `id` by one.
    ///
    /// An unknown id is a silent no-op, not an error. A write of the
    /// (possibly unchanged) list is still scheduled, mirroring current
    /// in-memory content.
    pub async fn increment(&self, id: &ProductId) {
        let snapshot = {
            let mut items = self.inner.items.write().await;
            if let Some(entry) = items.iter_mut().find(|entry| &entry.id == id) {
                entry.quantity += 1;
            }
            items.clone()
        };
        self.after_mutation(snapshot).await;
    }

    /// Lower the quantity of the entry matching `id` by one, flooring at 1.
    ///
    /// A quantity-1 entry is left unchanged, never removed. An unknown id is
    /// a silent no-op. A write is always scheduled.
    pub async fn decrement(&self, id: &ProductId) {
        let snapshot = {
            let mut items = self.inner.items.write().await;
            if let Some(entry) = items
                .iter_mut()
                .find(|entry| &entry.id == id && entry.quantity > 1)
            {
                entry.quantity -= 1;
            }
            items.clone()
        };
        self.after_mutation(snapshot).await;
    }

    /// Current list of cart items, in insertion order.
    pub async fn snapshot(&self) -> Vec<CartItem> {
        self.inner.items.read().await.clone()
    }

    /// Register `listener` to be called with the new snapshot after each
    /// mutation.
    pub async fn subscribe(&self, listener: impl Fn(&[CartItem]) + Send + Sync + 'static) {
        self.inner.subscribers.lock().await.push(Box::new(listener));
    }

    /// Wait until every write scheduled so far has settled in storage.
    pub async fn flush(&self) {
        let (done, settled) = oneshot::channel();
        if self.inner.writer.send(WriterMessage::Flush(done)).is_ok() {
            let _ = settled.await;
        }
    }

    /// Notify subscribers and hand the post-mutation list to the worker.
    async fn after_mutation(&self, snapshot: Vec<CartItem>) {
        {
            let subscribers = self.inner.subscribers.lock().await;
            for listener in subscribers.iter() {
                listener(&snapshot);
            }
        }

        if self
            .inner
            .writer
            .send(WriterMessage::Persist(snapshot))
            .is_err()
        {
            tracing::warn!("write worker is gone, cart is operating in-memory only");
        }
    }
}

/// Drain scheduled writes in order.
///
/// A failed save is logged and skipped, never retried; the store keeps
/// operating in-memory and the next mutation schedules a fresh write of the
/// full list.
async fn write_worker(
    persisted: PersistedStore,
    mut receiver: mpsc::UnboundedReceiver<WriterMessage>,
) {
    while let Some(message) = receiver.recv().await {
        match message {
            WriterMessage::Persist(items) => match persisted.save_items(&items).await {
                Ok(()) => tracing::debug!(items = items.len(), "persisted cart"),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to persist cart, continuing in-memory");
                }
            },
            WriterMessage::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}
