//! Error types for the catalog store and loader.

use thiserror::Error;

/// Errors that can occur while fetching, validating, or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network or TLS failure while fetching the catalog resource.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog endpoint answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body is not a valid catalog document.
    #[error("catalog payload is not valid JSON: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// A product record lists no sizes.
    #[error("product \"{name}\" lists no sizes")]
    NoSizes { name: String },

    /// A product record has a listed size with neither a per-size price nor a base
    /// price. Rejected at load time so an unpriced selection can never reach the cart.
    #[error("product \"{name}\" has no price for size \"{size}\"")]
    MissingPrice { name: String, size: String },

    /// An error occurred while communicating with the store actor.
    #[error("store communication error: {0}")]
    StoreCommunication(String),
}
