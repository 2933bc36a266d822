//! # StoreEntity Trait
//!
//! The `StoreEntity` trait defines the contract that every stored record (Product,
//! LineItem, …) must implement to be managed by the generic `StoreActor`. It specifies
//! associated types for IDs, creation payloads, context, and errors, and provides the
//! `on_create` lifecycle hook. Implementing this trait gives the framework a uniform
//! append/lookup/remove API for any record type.
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining a contract (`StoreEntity`) that all our stored record types must satisfy,
//! we can write the `StoreActor` loop *once* and reuse it for both the catalog and the
//! cart. Associated types keep the payloads honest: a catalog store only accepts catalog
//! creation payloads, and the compiler rejects everything else.
//!
//! # Provided Methods (Hooks)
//! [`StoreEntity::on_create`] has a default no-op implementation. Override it when a
//! record needs to resolve data from elsewhere before it is stored; the cart's line
//! items use it to snapshot product data from the catalog.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a [`StoreActor`].
///
/// # Async & Context
/// This trait is `#[async_trait]` so that `on_create` can await other stores. The
/// `Context` type is injected into the hook at runtime ("late binding": dependencies are
/// passed to `run()` rather than to the store's constructor).
///
/// [`StoreActor`]: crate::framework::StoreActor
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from `u32` for automatic ID generation.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the store's run loop.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per store, not one per operation. The enum must be the union of
    /// everything its operations can raise, which loses a little precision but keeps
    /// client code dealing with a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the generated ID and the creation payload.
    /// This is called synchronously before `on_create`; it is the place for payload
    /// validation that needs no external data.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The record's identifier, used for ordered-store lookups and removal.
    fn id(&self) -> &Self::Id;

    /// Called after the record is constructed and before it is stored.
    /// A failed hook discards the record; the store is left unchanged.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
