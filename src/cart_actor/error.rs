//! Error types for the cart store.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The selection references a product the catalog does not contain.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The chosen size is not listed on the product and the product has no base
    /// price, so no unit price can be snapshotted.
    #[error("no price for \"{product}\" size \"{size}\"")]
    UnpricedSelection { product: String, size: String },

    /// The requested line item was not found in the cart.
    #[error("line item not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with a store actor.
    #[error("store communication error: {0}")]
    StoreCommunication(String),
}
