//! End-to-end cart flows through the injected store handle.
//!
//! These tests drive the store exactly the way a consuming UI does:
//! build an item, invoke the operations, and re-read `items`/`total`
//! after every action. Run with `RUST_LOG=debug` to see the operation
//! log.

use cart_core::{CartItem, Money};
use cart_store::{CartStore, SharedCartStore};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber honoring RUST_LOG. Idempotent across tests.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn new_cart_item() -> CartItem {
    CartItem {
        id: 1,
        name: "test".to_string(),
        category: "test".to_string(),
        description: "test".to_string(),
        image: String::new(),
        price: Money::from_minor(1000),
        quantity: 1,
    }
}

#[test]
fn add_to_cart_puts_the_item_in_cart_items() {
    init_tracing();
    let store = SharedCartStore::new();

    store.add_to_cart(new_cart_item());

    assert!(store.items().contains(&new_cart_item()));
}

#[test]
fn remove_from_cart_drops_the_item_with_that_id() {
    init_tracing();
    let store = SharedCartStore::new();

    store.add_to_cart(new_cart_item());
    assert!(store.items().contains(&new_cart_item()));

    store.remove_from_cart(1);

    assert!(store.items().is_empty());
    assert_eq!(store.total(), Money::zero());
}

#[test]
fn clear_cart_leaves_an_empty_cart() {
    init_tracing();
    let store = SharedCartStore::new();

    for _ in 0..4 {
        store.add_to_cart(new_cart_item());
    }
    store.clear_cart();

    assert!(store.items().is_empty());
    assert_eq!(store.total(), Money::zero());
}

#[test]
fn total_is_the_sum_of_prices_in_the_cart() {
    init_tracing();
    let store = SharedCartStore::new();

    for _ in 0..4 {
        store.add_to_cart(new_cart_item());
    }

    // Four rows at 1000 each; the rows' quantity fields stay 1.
    assert_eq!(store.total(), Money::from_minor(4000));
    assert!(store.items().iter().all(|item| item.quantity == 1));
}

#[test]
fn remove_from_cart_with_unknown_id_changes_nothing() {
    init_tracing();
    let store = SharedCartStore::new();

    store.add_to_cart(new_cart_item());
    let before = store.items();

    store.remove_from_cart(42);

    assert_eq!(store.items(), before);
}

#[test]
fn consumers_see_updates_through_an_injected_handle() {
    init_tracing();

    // A consumer depends on the contract, not the concrete store.
    fn totals_line(store: &dyn CartStore) -> String {
        let totals = store.totals();
        format!("{} items / {}", totals.entry_count, totals.total)
    }

    let store = SharedCartStore::new();
    store.add_to_cart(new_cart_item());
    store.add_to_cart(new_cart_item());

    assert_eq!(totals_line(&store), "2 items / 2000");

    store.clear_cart();
    assert_eq!(totals_line(&store), "0 items / 0");
}

#[test]
fn snapshot_matches_the_frontend_contract() {
    init_tracing();
    let store = SharedCartStore::new();
    store.add_to_cart(new_cart_item());

    let value = serde_json::to_value(store.snapshot()).unwrap();

    assert_eq!(value["items"][0]["id"], 1);
    assert_eq!(value["items"][0]["price"], 1000);
    assert_eq!(value["totals"]["entryCount"], 1);
    assert_eq!(value["totals"]["total"], 1000);
}

#[test]
fn mixed_operation_sequence() {
    init_tracing();
    let store = SharedCartStore::new();

    let americano = new_cart_item();
    let latte = CartItem {
        id: 2,
        name: "latte".to_string(),
        price: Money::from_minor(1500),
        ..new_cart_item()
    };

    store.add_to_cart(americano.clone());
    store.add_to_cart(latte.clone());
    store.add_to_cart(americano);
    assert_eq!(store.total(), Money::from_minor(3500));

    // Removing id 1 drops both americano rows.
    store.remove_from_cart(1);
    assert_eq!(store.items(), vec![latte]);
    assert_eq!(store.total(), Money::from_minor(1500));
}
