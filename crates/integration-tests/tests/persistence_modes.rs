//! Startup behavior across simulated restarts, in both persistence modes.
//!
//! A "restart" here is dropping every handle and reopening the store against
//! the same backing file.

use std::path::Path;

use rust_decimal::Decimal;

use go_marketplace_cart::{CartConfig, CartStore, PersistenceMode};
use go_marketplace_core::{NewCartItem, ProductId};
use go_marketplace_integration_tests::{init_tracing, temp_storage_path};

fn item(id: &str, title: &str) -> NewCartItem {
    NewCartItem {
        id: ProductId::new(id),
        title: title.to_string(),
        image_url: format!("https://cdn.example.com/{id}.png"),
        price: Decimal::new(255, 1),
    }
}

async fn open_cart(path: &Path, mode: PersistenceMode) -> CartStore {
    let config = CartConfig {
        storage_path: path.to_path_buf(),
        persistence: mode,
    };
    CartStore::from_config(&config)
        .await
        .expect("backing file opens")
}

#[tokio::test]
async fn test_session_only_restart_starts_empty() {
    init_tracing();
    let path = temp_storage_path();

    {
        let store = open_cart(&path, PersistenceMode::SessionOnly).await;
        store.add(item("1", "Shirt")).await;
        store.flush().await;
    }

    // The medium is wiped right before the startup read, so nothing survives
    let store = open_cart(&path, PersistenceMode::SessionOnly).await;
    assert!(store.snapshot().await.is_empty());

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_persistent_restart_restores_cart() {
    init_tracing();
    let path = temp_storage_path();

    {
        let store = open_cart(&path, PersistenceMode::Persistent).await;
        store.add(item("1", "Shirt")).await;
        store.add(item("1", "Shirt")).await;
        store.flush().await;
    }

    let store = open_cart(&path, PersistenceMode::Persistent).await;
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.first().expect("one product").quantity, 2);

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_persistent_restart_preserves_order_and_fields() {
    init_tracing();
    let path = temp_storage_path();

    let before = {
        let store = open_cart(&path, PersistenceMode::Persistent).await;
        store.add(item("2", "Mug")).await;
        store.add(item("1", "Shirt")).await;
        store.add(item("3", "Poster")).await;
        store.flush().await;
        store.snapshot().await
    };

    let store = open_cart(&path, PersistenceMode::Persistent).await;
    assert_eq!(store.snapshot().await, before);

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_session_after_persistent_wipes_the_old_cart() {
    init_tracing();
    let path = temp_storage_path();

    {
        let store = open_cart(&path, PersistenceMode::Persistent).await;
        store.add(item("1", "Shirt")).await;
        store.flush().await;
    }

    // Switching the flag back to session-only erases the leftover cart
    let store = open_cart(&path, PersistenceMode::SessionOnly).await;
    assert!(store.snapshot().await.is_empty());

    let _ = tokio::fs::remove_file(&path).await;
}
