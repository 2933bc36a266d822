//! Shipping eligibility check.

use crate::model::LineItem;

/// The informational notice shown when the cart holds pickup-only items.
pub const PICKUP_NOTICE: &str = "⚠️ Some items in your cart require local pickup only.";

/// True iff at least one line item cannot ship.
///
/// Informational only: nothing is blocked either way.
pub fn requires_pickup(items: &[LineItem]) -> bool {
    items.iter().any(|item| !item.can_ship)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItemId, ProductId};

    fn item(id: u32, can_ship: bool) -> LineItem {
        LineItem {
            id: LineItemId(id),
            product_id: ProductId(1),
            name: "Cake".to_string(),
            emoji: "🍰".to_string(),
            size: "M".to_string(),
            flavor: None,
            notes: None,
            quantity: 1,
            unit_price: 10.0,
            can_ship,
        }
    }

    #[test]
    fn all_shippable_hides_notice() {
        assert!(!requires_pickup(&[item(1, true)]));
    }

    #[test]
    fn any_pickup_only_item_shows_notice() {
        assert!(requires_pickup(&[item(1, true), item(2, false)]));
    }

    #[test]
    fn empty_cart_hides_notice() {
        assert!(!requires_pickup(&[]));
    }
}
