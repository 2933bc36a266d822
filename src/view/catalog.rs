//! Product card view models.
//!
//! A [`ProductCard`] is the projection of one catalog product plus the mutable form
//! state the user edits on it (selected size and flavor, notes, quantity). The session
//! owns the cards; surfaces only ever see them as data.

use crate::model::{Product, ProductId};

/// One rendered product card.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub product_id: ProductId,
    /// Display title: emoji glyph followed by the product name.
    pub title: String,
    /// Price label for the currently selected size, e.g. `from $20.00`.
    pub price_label: String,
    pub sizes: Vec<String>,
    pub selected_size: String,
    /// Flavor options; empty means the card has no flavor selector.
    pub flavors: Vec<String>,
    pub selected_flavor: Option<String>,
    /// Whether the card shows a free-text flavor-notes field.
    pub has_notes_field: bool,
    pub notes: String,
    pub quantity: u32,
    pub visible: bool,
}

/// Projects the catalog into product cards, one per product in catalog order.
///
/// Defaults: first size selected, first flavor selected (when any), quantity 1,
/// empty notes, visible.
pub fn render_cards(products: &[Product]) -> Vec<ProductCard> {
    products.iter().map(card_for).collect()
}

fn card_for(product: &Product) -> ProductCard {
    ProductCard {
        product_id: product.id.clone(),
        title: format!("{} {}", product.emoji, product.name),
        price_label: price_label(product.starting_price),
        sizes: product.sizes.clone(),
        selected_size: product.sizes.first().cloned().unwrap_or_default(),
        flavors: product.flavors.clone(),
        selected_flavor: product.flavors.first().cloned(),
        has_notes_field: product.flavor_notes,
        notes: String::new(),
        quantity: 1,
        visible: true,
    }
}

/// Formats a starting-price label.
pub fn price_label(price: f64) -> String {
    format!("from ${price:.2}")
}

/// Re-derives the card's price label from its currently selected size.
///
/// Display-only: the catalog is never touched. An unresolvable size (not listed, no
/// base price) leaves the label unchanged.
pub fn refresh_price(card: &mut ProductCard, product: &Product) {
    if let Some(price) = product.price_for(&card.selected_size) {
        card.price_label = price_label(price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cake() -> Product {
        Product {
            id: ProductId(1),
            name: "Cake".to_string(),
            emoji: "🍰".to_string(),
            sizes: vec!["S".to_string(), "M".to_string()],
            base_price: Some(20.0),
            size_price: HashMap::from([("S".to_string(), 20.0), ("M".to_string(), 35.0)]),
            flavors: vec!["Vanilla".to_string(), "Chocolate".to_string()],
            flavor_notes: true,
            dietary: vec!["vegan".to_string()],
            can_ship: true,
            starting_price: 20.0,
        }
    }

    #[test]
    fn card_defaults_to_first_size_and_flavor() {
        let cards = render_cards(&[cake()]);
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.title, "🍰 Cake");
        assert_eq!(card.price_label, "from $20.00");
        assert_eq!(card.selected_size, "S");
        assert_eq!(card.selected_flavor.as_deref(), Some("Vanilla"));
        assert!(card.has_notes_field);
        assert_eq!(card.quantity, 1);
        assert!(card.visible);
    }

    #[test]
    fn refresh_price_follows_selected_size() {
        let product = cake();
        let mut card = render_cards(std::slice::from_ref(&product)).remove(0);

        card.selected_size = "M".to_string();
        refresh_price(&mut card, &product);
        assert_eq!(card.price_label, "from $35.00");

        card.selected_size = "S".to_string();
        refresh_price(&mut card, &product);
        assert_eq!(card.price_label, "from $20.00");
    }

    #[test]
    fn refresh_price_falls_back_to_base_price_for_unlisted_size() {
        let product = cake();
        let mut card = render_cards(std::slice::from_ref(&product)).remove(0);

        card.selected_size = "XL".to_string();
        refresh_price(&mut card, &product);
        assert_eq!(card.price_label, "from $20.00");
    }

    #[test]
    fn card_without_flavors_has_no_selector() {
        let mut product = cake();
        product.flavors.clear();
        let card = render_cards(std::slice::from_ref(&product)).remove(0);
        assert!(card.flavors.is_empty());
        assert!(card.selected_flavor.is_none());
    }
}
