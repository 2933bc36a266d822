/// Cart line-item types.
///
/// # Store Framework
/// [`LineItem`] implements the [`StoreEntity`](crate::framework::StoreEntity) trait
/// (see [`crate::cart_actor::entity`]), allowing the cart to be managed by a
/// [`StoreActor`](crate::framework::StoreActor).
use crate::model::ProductId;
use std::fmt::Display;

/// Type-safe identifier for cart line items, assigned at append time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineItemId(pub u32);

impl From<u32> for LineItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Payload for appending a line item: the user's selection on one product card.
#[derive(Debug, Clone)]
pub struct LineItemCreate {
    pub product_id: ProductId,
    pub size: String,
    pub flavor: Option<String>,
    pub notes: Option<String>,
    pub quantity: u32,
}

/// One cart entry: a price-and-selection snapshot taken at add time.
///
/// The snapshot fields (`name`, `emoji`, `unit_price`, `can_ship`) are copied from the
/// product when the item enters the cart and never re-derived afterwards.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub id: LineItemId,
    pub product_id: ProductId,
    pub name: String,
    pub emoji: String,
    pub size: String,
    pub flavor: Option<String>,
    pub notes: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    pub can_ship: bool,
}

impl LineItem {
    /// Line total: unit price × quantity.
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Coerces raw quantity input to a positive integer.
///
/// Non-numeric, zero, and negative input all become 1.
pub fn coerce_quantity(input: &str) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|q| *q >= 1)
        .unwrap_or(1)
}
