//! Generic store-actor framework.
//!
//! This module provides the core building blocks for the storefront's stateful stores:
//! a generic actor that exclusively owns an insertion-ordered record collection, a
//! cheap-to-clone client for talking to it, and a mock client for tests.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that record types implement to be managed by a store actor
//! - [`StoreActor`] - Generic actor that owns the records
//! - [`StoreClient`] - Type-safe channel client
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoreEntity;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
