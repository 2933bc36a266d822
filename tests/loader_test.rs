//! Catalog loader tests.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real network
//! traffic is made. Covers the happy paths and every failure that must leave the
//! catalog empty.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront::catalog_actor::{self, load, CatalogError, CatalogLoader};
use storefront::clients::StoreHandle;

/// Builds a `CatalogLoader` suitable for tests: 5-second timeout, descriptive UA.
fn test_loader(server_uri: &str) -> CatalogLoader {
    CatalogLoader::new(format!("{server_uri}/products.json"), 5, "storefront-test/0.1")
        .expect("failed to build test CatalogLoader")
}

/// Minimal valid one-product catalog fixture.
fn cake_json() -> serde_json::Value {
    json!([{
        "name": "Cake",
        "emoji": "🍰",
        "sizes": ["S", "M"],
        "basePrice": 20.0,
        "sizePrice": { "S": 20.0, "M": 35.0 },
        "flavors": ["Vanilla", "Chocolate"],
        "flavorNotes": true,
        "dietary": ["vegan"],
        "canShip": true
    }])
}

// ---------------------------------------------------------------------------
// fetch – wire-level behavior
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_parses_catalog_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&cake_json()))
        .mount(&server)
        .await;

    let records = test_loader(&server.uri())
        .fetch()
        .await
        .expect("expected Ok");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Cake");
    assert_eq!(records[0].sizes, vec!["S", "M"]);
    assert_eq!(records[0].base_price, Some(20.0));
    assert!(records[0].flavor_notes);
    assert!(records[0].can_ship);
}

#[tokio::test]
async fn fetch_rejects_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = test_loader(&server.uri()).fetch().await;
    assert!(matches!(
        result,
        Err(CatalogError::UnexpectedStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn fetch_rejects_malformed_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not a catalog"))
        .mount(&server)
        .await;

    let result = test_loader(&server.uri()).fetch().await;
    assert!(matches!(result, Err(CatalogError::Deserialize(_))));
}

#[tokio::test]
async fn fetch_defaults_absent_fields() {
    let server = MockServer::start().await;

    // Only the required fields: everything else defaults, including canShip → false.
    let minimal = json!([{
        "name": "Mystery Box",
        "emoji": "🎁",
        "sizes": ["One Size"],
        "basePrice": 10.0
    }]);

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&minimal))
        .mount(&server)
        .await;

    let records = test_loader(&server.uri()).fetch().await.expect("expected Ok");
    let record = &records[0];
    assert!(record.size_price.is_empty());
    assert!(record.flavors.is_empty());
    assert!(!record.flavor_notes);
    assert!(record.dietary.is_empty());
    assert!(!record.can_ship, "absent canShip means local pickup only");
}

// ---------------------------------------------------------------------------
// load – replace-or-empty semantics against a real catalog actor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_populates_the_catalog() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&cake_json()))
        .mount(&server)
        .await;

    let (actor, catalog_client) = catalog_actor::new();
    tokio::spawn(actor.run(()));

    let products = load(&test_loader(&server.uri()), &catalog_client).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Cake");
    assert_eq!(products[0].starting_price, 20.0);

    let listed = catalog_client.list().await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn load_replaces_prior_contents() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&cake_json()))
        .mount(&server)
        .await;

    let (actor, catalog_client) = catalog_actor::new();
    tokio::spawn(actor.run(()));

    load(&test_loader(&server.uri()), &catalog_client).await;
    load(&test_loader(&server.uri()), &catalog_client).await;

    // Two loads, one catalog: not an append.
    assert_eq!(catalog_client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_load_leaves_catalog_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&cake_json()))
        .expect(1)
        .mount(&server)
        .await;

    let (actor, catalog_client) = catalog_actor::new();
    tokio::spawn(actor.run(()));

    // First load succeeds...
    let products = load(&test_loader(&server.uri()), &catalog_client).await;
    assert_eq!(products.len(), 1);

    // ...then the endpoint goes away and the reload empties the catalog.
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let products = load(&test_loader(&server.uri()), &catalog_client).await;
    assert!(products.is_empty());
    assert!(catalog_client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn validation_failure_empties_catalog() {
    let server = MockServer::start().await;

    // Second product has a listed size with no sizePrice entry and no basePrice.
    let payload = json!([
        {
            "name": "Cake",
            "emoji": "🍰",
            "sizes": ["S"],
            "basePrice": 20.0,
            "canShip": true
        },
        {
            "name": "Broken",
            "emoji": "💥",
            "sizes": ["S", "XL"],
            "sizePrice": { "S": 5.0 }
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    let (actor, catalog_client) = catalog_actor::new();
    tokio::spawn(actor.run(()));

    let products = load(&test_loader(&server.uri()), &catalog_client).await;
    assert!(products.is_empty(), "a bad record must fail the whole load");
    assert!(catalog_client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn product_with_no_sizes_is_rejected() {
    let server = MockServer::start().await;

    let payload = json!([{
        "name": "Sizeless",
        "emoji": "❓",
        "sizes": [],
        "basePrice": 5.0
    }]);

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    let (actor, catalog_client) = catalog_actor::new();
    tokio::spawn(actor.run(()));

    let products = load(&test_loader(&server.uri()), &catalog_client).await;
    assert!(products.is_empty());
}
