//! # Storefront
//!
//! > **An actor-backed storefront core: catalog, cart, and the views between them.**
//!
//! This crate loads a product catalog from a remote JSON resource, projects it into
//! product card view models, tracks a shopping cart in memory, filters the catalog by
//! dietary tags, and surfaces payment instructions. The two stateful stores (catalog
//! and cart) are each exclusively owned by a store actor; everything else is either a
//! cheap-to-clone client or a pure projection.
//!
//! ## Design Notes
//!
//! ### 1. One Actor per Store
//! Each [`StoreActor`](framework::StoreActor) runs in its own Tokio task and processes
//! messages sequentially, so store state needs no locks. The catalog is immutable
//! after load; the cart mutates only in response to discrete user events.
//!
//! ### 2. Stable Identifiers
//! Products get a [`ProductId`](model::ProductId) at load time and line items a
//! [`LineItemId`](model::LineItemId) at append time. Every lookup and removal is by
//! id; insertion order is preserved so ordered views need no extra bookkeeping.
//!
//! ### 3. Snapshots over References
//! A cart line item copies name, emoji, unit price, and shipping eligibility from the
//! product the moment it is added (in the entity's `on_create` hook, with the catalog
//! client injected as context). Later catalog changes never retroactively affect a
//! staged item.
//!
//! ### 4. Views are Data
//! Renderers produce plain structs ([`ProductCard`](view::ProductCard),
//! [`CartView`](view::CartView)); the [`Surface`](view::Surface) trait is the opaque
//! sink a display medium implements. A surface lacking a region ignores the call.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `StoreActor<T>` / `StoreClient<T>` pair and the `StoreEntity` trait.
//!
//! ### 2. The Domain ([`model`], [`catalog_actor`], [`cart_actor`])
//! Pure data types plus the two entity implementations, including catalog validation
//! and the line-item snapshot hook. The catalog's HTTP loader lives in
//! [`catalog_actor::loader`].
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers ([`CatalogClient`](clients::CatalogClient),
//! [`CartClient`](clients::CartClient)) that hide raw message passing.
//!
//! ### 4. The Views ([`view`], [`session`])
//! Pure projections and the [`Session`](session::Session) that dispatches user events
//! and re-renders after every mutation.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`Storefront`](lifecycle::Storefront) spawns and wires the actors;
//! [`setup_tracing`](lifecycle::setup_tracing) and [`Config`](lifecycle::Config)
//! cover observability and configuration.
//!
//! ## Running the Demo
//!
//! ```bash
//! CATALOG_URL=https://shop.example/products.json RUST_LOG=info cargo run
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod session;
pub mod view;
