//! HTTP loader for the catalog resource.
//!
//! The catalog is fetched once at startup from a configured URL serving a JSON array
//! of product records. Failures are not retried: the catalog simply stays empty and
//! the storefront renders an empty grid.

use std::time::Duration;

use reqwest::Client;
use tracing::{error, info};

use crate::catalog_actor::error::CatalogError;
use crate::clients::{CatalogClient, StoreHandle};
use crate::model::{Product, ProductRecord};

/// HTTP client for the catalog endpoint.
///
/// Non-2xx statuses and malformed payloads surface as typed errors. The body is read
/// as text and deserialized explicitly so a malformed document maps to
/// [`CatalogError::Deserialize`] rather than a generic transport error.
pub struct CatalogLoader {
    client: Client,
    url: String,
}

impl CatalogLoader {
    /// Creates a `CatalogLoader` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed (e.g., invalid TLS config).
    pub fn new(
        url: impl Into<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetches and parses the catalog document.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] — network or TLS failure.
    /// - [`CatalogError::UnexpectedStatus`] — any non-2xx status.
    /// - [`CatalogError::Deserialize`] — body is not a JSON array of product records.
    pub async fn fetch(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let records: Vec<ProductRecord> = serde_json::from_str(&body)?;
        Ok(records)
    }
}

/// Replaces the catalog store's contents with the fetched document.
///
/// On any failure (network, non-success status, malformed payload, or a record that
/// fails validation) the error is logged, the catalog is left empty, and no retry is
/// attempted. Returns the loaded (or empty) catalog snapshot.
pub async fn load(loader: &CatalogLoader, catalog: &CatalogClient) -> Vec<Product> {
    match try_load(loader, catalog).await {
        Ok(products) => {
            info!(count = products.len(), "Catalog loaded");
            products
        }
        Err(e) => {
            error!(error = %e, "Catalog load failed");
            if let Err(e) = catalog.clear().await {
                error!(error = %e, "Failed to reset catalog after load failure");
            }
            Vec::new()
        }
    }
}

async fn try_load(
    loader: &CatalogLoader,
    catalog: &CatalogClient,
) -> Result<Vec<Product>, CatalogError> {
    let records = loader.fetch().await?;
    catalog.clear().await?;
    for record in records {
        catalog.add_product(record).await?;
    }
    catalog.list().await
}
