use crate::clients::{CartClient, CatalogClient};
use tracing::{error, info};

/// The runtime orchestrator for the storefront's store actors.
///
/// `Storefront` is responsible for:
/// - **Lifecycle management**: starting and stopping both store actors
/// - **Dependency wiring**: injecting the catalog client into the cart actor so line
///   items can snapshot product data at append time
///
/// # Architecture
///
/// Two store actors run, one per stateful store:
/// - **Catalog actor**: the immutable-after-load product list
/// - **Cart actor**: the ordered line-item sequence, wired to the catalog
///
/// # Example
///
/// ```ignore
/// let system = Storefront::new();
///
/// let products = load(&loader, &system.catalog_client).await;
/// let line_id = system.cart_client.add_item(selection).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for the catalog store.
    pub catalog_client: CatalogClient,

    /// Client for the cart store.
    pub cart_client: CartClient,

    /// Task handles for the running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Creates and initializes a new `Storefront` with both store actors running.
    ///
    /// The catalog actor has no dependencies (`Context = ()`); the cart actor is
    /// started with a clone of the catalog client as its context (late binding: the
    /// dependency is injected at `run()` time, not at construction).
    pub fn new() -> Self {
        let (catalog_actor, catalog_client) = crate::catalog_actor::new();
        let (cart_actor, cart_client) = crate::cart_actor::new();

        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(catalog_client.clone()));

        Self {
            catalog_client,
            cart_client,
            handles: vec![catalog_handle, cart_handle],
        }
    }

    /// Gracefully shuts down both store actors.
    ///
    /// Dropping the clients closes their channels; each actor detects the closed
    /// channel and exits its loop. Any client clones handed out (e.g. to a session)
    /// must be dropped first, or the actors keep running until they are.
    ///
    /// # Errors
    ///
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.catalog_client);
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store actor task failed: {:?}", e);
                return Err(format!("Store actor task failed: {e:?}"));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}
