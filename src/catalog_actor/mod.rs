//! Catalog store: the immutable-after-load product list and its HTTP loader.

pub mod entity;
pub mod error;
pub mod loader;

pub use error::*;
pub use loader::*;

use crate::clients::CatalogClient;
use crate::framework::StoreActor;
use crate::model::Product;

/// Request channel capacity for the catalog store.
const CHANNEL_CAPACITY: usize = 32;

/// Creates a new catalog store actor and its client.
pub fn new() -> (StoreActor<Product>, CatalogClient) {
    let (actor, generic_client) = StoreActor::new(CHANNEL_CAPACITY);
    let client = CatalogClient::new(generic_client);
    (actor, client)
}
