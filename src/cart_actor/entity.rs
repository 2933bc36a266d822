//! Entity trait implementation for the LineItem domain type.
//!
//! This module contains the [`StoreEntity`] trait implementation that enables
//! [`LineItem`] to be managed by the generic [`crate::framework::StoreActor`].
//!
//! The price-and-selection snapshot is resolved in the `on_create` hook against the
//! catalog client injected as the cart actor's context. A failed resolution leaves the
//! cart unchanged.

use crate::cart_actor::error::CartError;
use crate::clients::{CatalogClient, StoreHandle};
use crate::framework::StoreEntity;
use crate::model::{LineItem, LineItemCreate, LineItemId};
use async_trait::async_trait;

#[async_trait]
impl StoreEntity for LineItem {
    type Id = LineItemId;
    type Create = LineItemCreate;
    type Context = CatalogClient;
    type Error = CartError;

    /// Builds the line item from the user's selection.
    ///
    /// Quantity is coerced to at least 1. The snapshot fields stay at their defaults
    /// until `on_create` resolves them from the catalog.
    fn from_create_params(id: LineItemId, params: LineItemCreate) -> Result<Self, CartError> {
        Ok(Self {
            id,
            product_id: params.product_id,
            name: String::new(),
            emoji: String::new(),
            size: params.size,
            flavor: params.flavor,
            notes: params.notes,
            quantity: params.quantity.max(1),
            unit_price: 0.0,
            can_ship: false,
        })
    }

    fn id(&self) -> &LineItemId {
        &self.id
    }

    /// Snapshots product data from the catalog: name, emoji, unit price for the chosen
    /// size, and shipping eligibility.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownProduct`] — the catalog has no such product.
    /// - [`CartError::UnpricedSelection`] — the chosen size resolves to no price.
    async fn on_create(&mut self, catalog: &CatalogClient) -> Result<(), CartError> {
        let product = catalog
            .get(self.product_id.clone())
            .await
            .map_err(|e| CartError::StoreCommunication(e.to_string()))?
            .ok_or_else(|| CartError::UnknownProduct(self.product_id.clone()))?;

        let unit_price =
            product
                .price_for(&self.size)
                .ok_or_else(|| CartError::UnpricedSelection {
                    product: product.name.clone(),
                    size: self.size.clone(),
                })?;

        self.name = product.name;
        self.emoji = product.emoji;
        self.unit_price = unit_price;
        self.can_ship = product.can_ship;
        Ok(())
    }
}
