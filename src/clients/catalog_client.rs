use crate::catalog_actor::CatalogError;
use crate::clients::store_handle::StoreHandle;
use crate::framework::{FrameworkError, StoreClient};
use crate::model::{Product, ProductId, ProductRecord};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the catalog store.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StoreClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }

    /// Inserts one wire record into the catalog. Validation happens inside the store;
    /// an invalid record is rejected and nothing is inserted.
    #[instrument(skip(self, record))]
    pub async fn add_product(&self, record: ProductRecord) -> Result<ProductId, CatalogError> {
        debug!("Sending request");
        self.inner.add(record).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreHandle<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CatalogError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(catalog_error) => *catalog_error,
                Err(other) => CatalogError::StoreCommunication(other.to_string()),
            },
            other => CatalogError::StoreCommunication(other.to_string()),
        }
    }
}
