//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `StoreClient` and `StoreActor`.

use crate::framework::entity::StoreEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to a store actor to request operations.
///
/// # Ordered-Store Operations
/// Both stores in this system are *ordered collections* (catalog order drives the
/// product grid, cart order drives the summary rows) and neither mutates records in
/// place: the catalog is immutable after load, and line items are add-time snapshots.
/// The operation set reflects that:
///
/// - **Add**: append a new record built from [`StoreEntity::Create`].
/// - **Get**: fetch one record by ID.
/// - **List**: snapshot every record in insertion order.
/// - **Remove**: delete one record by ID; later records keep their relative order.
/// - **Clear**: delete everything.
///
/// The enum is generic over `T: StoreEntity`, so a payload for one store type can never
/// be sent to another.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Add {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List { respond_to: Response<Vec<T>> },
    Remove { id: T::Id, respond_to: Response<()> },
    Clear { respond_to: Response<()> },
}
