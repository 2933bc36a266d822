//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for managing the application's runtime
//! environment:
//!
//! - **Actor lifecycle management**: starting, wiring, and shutting down the store actors
//! - **Configuration**: environment-driven settings for the catalog fetch
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`Storefront`] - the orchestrator that owns both store actors
//! - [`Config`] - environment-driven configuration
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod system;
pub mod tracing;

pub use self::config::*;
pub use self::system::*;
pub use self::tracing::*;
