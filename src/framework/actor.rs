//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the core component that owns the state of an
//! ordered record collection. It implements the "server" side of the actor model,
//! processing messages sequentially and ensuring exclusive access to the store.

use crate::framework::client::StoreClient;
use crate::framework::entity::StoreEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns an insertion-ordered collection of records.
///
/// # Architecture Note
/// This struct is the "server" half of a store. It owns the state (`entries`) and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `StoreActor` processes its messages *sequentially* in its own task, so the
/// `entries` vector needs no `Mutex` or `RwLock`! Exclusive ownership inside the task
/// is the synchronization.
///
/// **Ordering**:
/// Records are kept in insertion order. `List` returns them in that order, and `Remove`
/// deletes in place so later records keep their relative positions. Lookups are linear
/// scans by ID, which is the right trade for collections this size.
///
/// # Usage Pattern
///
/// 1. **Create**: Call `StoreActor::new()` to get the actor (server) and its client.
/// 2. **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use storefront::framework::{StoreActor, StoreEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl StoreEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: params.text })
///     }
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///     let id = client.add(NoteCreate { text: "hello".into() }).await.unwrap();
///     assert_eq!(client.list().await.unwrap().len(), 1);
///     client.remove(id).await.unwrap();
/// }
/// ```
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    entries: Vec<T>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: Vec::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into the `on_create` hook of every record.
    /// This lets records reach external dependencies (like other store clients) that
    /// were created *after* the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Product" instead of "storefront::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Add { params, respond_to } => {
                    debug!(entity_type, ?params, "Add");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.entries.push(item);
                            info!(entity_type, %id, size = self.entries.len(), "Added");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Add failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.entries.iter().find(|item| item.id() == &id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.entries.len(), "List");
                    let _ = respond_to.send(Ok(self.entries.clone()));
                }
                StoreRequest::Remove { id, respond_to } => {
                    debug!(entity_type, %id, "Remove");
                    match self.entries.iter().position(|item| item.id() == &id) {
                        Some(pos) => {
                            self.entries.remove(pos);
                            info!(entity_type, %id, size = self.entries.len(), "Removed");
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        }
                    }
                }
                StoreRequest::Clear { respond_to } => {
                    let removed = self.entries.len();
                    self.entries.clear();
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.entries.len(), "Shutdown");
    }
}
