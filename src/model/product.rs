/// Catalog product types.
///
/// # Store Framework
/// [`Product`] implements the [`StoreEntity`](crate::framework::StoreEntity) trait
/// (see [`crate::catalog_actor::entity`]), allowing the catalog to be managed by a
/// [`StoreActor`](crate::framework::StoreActor).
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Display;

/// Type-safe identifier for products, assigned at catalog-load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// One product as it appears in the catalog resource.
///
/// This is the wire format: what the remote catalog serves. It becomes a [`Product`]
/// when inserted into the catalog store, which is also where it is validated.
///
/// `canShip` absent means the item cannot ship (local pickup only).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub emoji: String,
    pub sizes: Vec<String>,
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub size_price: HashMap<String, f64>,
    #[serde(default)]
    pub flavors: Vec<String>,
    #[serde(default)]
    pub flavor_notes: bool,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub can_ship: bool,
}

/// A validated catalog product. Immutable after load.
///
/// `starting_price` is the resolved price of the first listed size, computed during
/// validation so renderers never re-derive it.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub emoji: String,
    pub sizes: Vec<String>,
    pub base_price: Option<f64>,
    pub size_price: HashMap<String, f64>,
    pub flavors: Vec<String>,
    pub flavor_notes: bool,
    pub dietary: Vec<String>,
    pub can_ship: bool,
    pub starting_price: f64,
}

impl Product {
    /// Resolves the price for a size: the per-size entry if one exists, else the base
    /// price. `None` only for a size that is not listed on a product without a base
    /// price; validation guarantees every *listed* size resolves.
    pub fn price_for(&self, size: &str) -> Option<f64> {
        self.size_price.get(size).copied().or(self.base_price)
    }
}
