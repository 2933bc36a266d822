//! View models: pure projections of store snapshots into plain data.
//!
//! Nothing in this module talks to a store or produces markup. Renderers take a
//! snapshot and return data; the [`Surface`] trait is the opaque sink that turns the
//! data into whatever the display medium wants.

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod payment;
pub mod shipping;
pub mod surface;

pub use cart::{CartRow, CartView, EMPTY_CART_MESSAGE};
pub use catalog::{render_cards, ProductCard};
pub use payment::{PaymentMethod, ALL_METHODS};
pub use shipping::PICKUP_NOTICE;
pub use surface::Surface;
