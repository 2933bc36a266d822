//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`StoreEntity`] trait implementation that enables
//! [`Product`] to be managed by the generic [`crate::framework::StoreActor`].
//!
//! Validation happens here, at insertion: a record that cannot price every listed size
//! is rejected, which aborts the catalog load. After a successful load every card the
//! renderer produces has a resolvable price.

use crate::catalog_actor::error::CatalogError;
use crate::framework::StoreEntity;
use crate::model::{Product, ProductId, ProductRecord};
use async_trait::async_trait;

#[async_trait]
impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductRecord;
    type Context = ();
    type Error = CatalogError;

    /// Validates a wire record and constructs the catalog Product.
    ///
    /// # Rejected Records
    /// - empty `sizes`
    /// - any listed size with neither a `sizePrice` entry nor a `basePrice`
    fn from_create_params(id: ProductId, record: ProductRecord) -> Result<Self, CatalogError> {
        let first_size = record.sizes.first().ok_or_else(|| CatalogError::NoSizes {
            name: record.name.clone(),
        })?;

        for size in &record.sizes {
            if !record.size_price.contains_key(size) && record.base_price.is_none() {
                return Err(CatalogError::MissingPrice {
                    name: record.name.clone(),
                    size: size.clone(),
                });
            }
        }

        let starting_price = record
            .size_price
            .get(first_size)
            .copied()
            .or(record.base_price)
            .ok_or_else(|| CatalogError::MissingPrice {
                name: record.name.clone(),
                size: first_size.clone(),
            })?;

        Ok(Self {
            id,
            name: record.name,
            emoji: record.emoji,
            sizes: record.sizes,
            base_price: record.base_price,
            size_price: record.size_price,
            flavors: record.flavors,
            flavor_notes: record.flavor_notes,
            dietary: record.dietary,
            can_ship: record.can_ship,
            starting_price,
        })
    }

    fn id(&self) -> &ProductId {
        &self.id
    }
}
