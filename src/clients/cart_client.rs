use crate::cart_actor::CartError;
use crate::clients::store_handle::StoreHandle;
use crate::framework::{FrameworkError, StoreClient};
use crate::model::{LineItem, LineItemCreate, LineItemId};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the cart store.
///
/// Snapshot resolution (product lookup, unit-price selection) happens in the line
/// item's `on_create` hook inside the cart actor, not here.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<LineItem>,
}

impl CartClient {
    pub fn new(inner: StoreClient<LineItem>) -> Self {
        Self { inner }
    }

    /// Appends a line item built from the user's selection.
    #[instrument(skip(self, selection))]
    pub async fn add_item(&self, selection: LineItemCreate) -> Result<LineItemId, CartError> {
        debug!(?selection, "add_item called");
        info!("Sending add_item to cart store");
        self.inner.add(selection).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreHandle<LineItem> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<LineItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CartError {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::StoreCommunication(other.to_string()),
            },
            other => CartError::StoreCommunication(other.to_string()),
        }
    }
}
