//! Cart actor tests with a mocked catalog.
//!
//! Pattern: real cart actor (exercises the line item's `on_create` snapshot logic),
//! mocked catalog client (isolates the dependency).

use std::collections::HashMap;

use storefront::cart_actor::{self, CartError};
use storefront::clients::{CatalogClient, StoreHandle};
use storefront::framework::mock::MockClient;
use storefront::model::{LineItemCreate, Product, ProductId};

fn cake_product() -> Product {
    Product {
        id: ProductId(1),
        name: "Cake".to_string(),
        emoji: "🍰".to_string(),
        sizes: vec!["S".to_string(), "M".to_string()],
        base_price: Some(20.0),
        size_price: HashMap::from([("S".to_string(), 20.0), ("M".to_string(), 35.0)]),
        flavors: vec!["Vanilla".to_string()],
        flavor_notes: true,
        dietary: vec!["vegan".to_string()],
        can_ship: true,
        starting_price: 20.0,
    }
}

fn selection(product_id: ProductId, size: &str, quantity: u32) -> LineItemCreate {
    LineItemCreate {
        product_id,
        size: size.to_string(),
        flavor: Some("Vanilla".to_string()),
        notes: None,
        quantity,
    }
}

/// The appended line item snapshots name, emoji, unit price, and shipping flag.
#[tokio::test]
async fn test_line_item_snapshots_product_data() {
    let mut catalog_mock = MockClient::<Product>::new();
    catalog_mock
        .expect_get(ProductId(1))
        .return_ok(Some(cake_product()));
    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (cart_actor, cart_client) = cart_actor::new();
    let actor_handle = tokio::spawn(cart_actor.run(catalog_client));

    let line_id = cart_client
        .add_item(selection(ProductId(1), "M", 2))
        .await
        .expect("Add failed");

    let item = cart_client
        .get(line_id)
        .await
        .expect("Get failed")
        .expect("Line item not found");
    assert_eq!(item.name, "Cake");
    assert_eq!(item.emoji, "🍰");
    assert_eq!(item.size, "M");
    assert_eq!(item.unit_price, 35.0);
    assert_eq!(item.quantity, 2);
    assert!(item.can_ship);
    assert_eq!(item.line_total(), 70.0);

    catalog_mock.verify();

    drop(cart_client);
    actor_handle.await.unwrap();
}

/// A selection for a product the catalog does not know is rejected; the cart stays
/// unchanged.
#[tokio::test]
async fn test_unknown_product_is_rejected() {
    let mut catalog_mock = MockClient::<Product>::new();
    catalog_mock.expect_get(ProductId(7)).return_ok(None);
    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (cart_actor, cart_client) = cart_actor::new();
    let actor_handle = tokio::spawn(cart_actor.run(catalog_client));

    let result = cart_client.add_item(selection(ProductId(7), "M", 1)).await;
    assert!(matches!(result, Err(CartError::UnknownProduct(_))));

    assert!(cart_client.list().await.unwrap().is_empty());

    catalog_mock.verify();

    drop(cart_client);
    actor_handle.await.unwrap();
}

/// An unlisted size on a product without a base price cannot be priced; the add is
/// rejected rather than staging a NaN total.
#[tokio::test]
async fn test_unpriced_selection_is_rejected() {
    let mut sized_only = cake_product();
    sized_only.base_price = None;

    let mut catalog_mock = MockClient::<Product>::new();
    catalog_mock
        .expect_get(ProductId(1))
        .return_ok(Some(sized_only));
    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (cart_actor, cart_client) = cart_actor::new();
    let actor_handle = tokio::spawn(cart_actor.run(catalog_client));

    let result = cart_client.add_item(selection(ProductId(1), "XL", 1)).await;
    assert!(matches!(
        result,
        Err(CartError::UnpricedSelection { .. })
    ));
    assert!(cart_client.list().await.unwrap().is_empty());

    catalog_mock.verify();

    drop(cart_client);
    actor_handle.await.unwrap();
}

/// Zero quantity is coerced to 1 when the line item is built.
#[tokio::test]
async fn test_zero_quantity_coerced_to_one() {
    let mut catalog_mock = MockClient::<Product>::new();
    catalog_mock
        .expect_get(ProductId(1))
        .return_ok(Some(cake_product()));
    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (cart_actor, cart_client) = cart_actor::new();
    let actor_handle = tokio::spawn(cart_actor.run(catalog_client));

    let line_id = cart_client
        .add_item(selection(ProductId(1), "S", 0))
        .await
        .expect("Add failed");
    let item = cart_client.get(line_id).await.unwrap().unwrap();
    assert_eq!(item.quantity, 1);

    catalog_mock.verify();

    drop(cart_client);
    actor_handle.await.unwrap();
}

/// Duplicate selections are kept as separate line items, never merged.
#[tokio::test]
async fn test_duplicate_selections_are_not_merged() {
    let mut catalog_mock = MockClient::<Product>::new();
    catalog_mock
        .expect_get(ProductId(1))
        .return_ok(Some(cake_product()));
    catalog_mock
        .expect_get(ProductId(1))
        .return_ok(Some(cake_product()));
    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (cart_actor, cart_client) = cart_actor::new();
    let actor_handle = tokio::spawn(cart_actor.run(catalog_client));

    let first = cart_client
        .add_item(selection(ProductId(1), "S", 1))
        .await
        .unwrap();
    let second = cart_client
        .add_item(selection(ProductId(1), "S", 1))
        .await
        .unwrap();
    assert_ne!(first, second);
    assert_eq!(cart_client.list().await.unwrap().len(), 2);

    catalog_mock.verify();

    drop(cart_client);
    actor_handle.await.unwrap();
}
