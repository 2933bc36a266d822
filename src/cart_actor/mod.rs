//! Cart store: the ordered, mutable sequence of line items the user has staged.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CartClient;
use crate::framework::StoreActor;
use crate::model::LineItem;

/// Request channel capacity for the cart store.
const CHANNEL_CAPACITY: usize = 32;

/// Creates a new cart store actor and its client.
///
/// The actor's run loop must be started with a [`CatalogClient`] as context: line
/// items resolve their snapshot from the catalog when they are appended.
///
/// [`CatalogClient`]: crate::clients::CatalogClient
pub fn new() -> (StoreActor<LineItem>, CartClient) {
    let (actor, generic_client) = StoreActor::new(CHANNEL_CAPACITY);
    let client = CartClient::new(generic_client);
    (actor, client)
}
