//! Dietary tag filtering.
//!
//! Filtering only toggles card visibility; the catalog and the cards' positions are
//! untouched, so card order always matches catalog order.

use crate::model::Product;
use crate::view::catalog::ProductCard;

/// Collects the distinct dietary tags across the catalog, in first-seen order.
pub fn collect_tags(products: &[Product]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for product in products {
        for tag in &product.dietary {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Whether a product passes the selected filters.
///
/// AND semantics: the product's tag set must contain every selected tag. An empty
/// selection matches everything.
pub fn matches(selected: &[String], product: &Product) -> bool {
    selected.iter().all(|tag| product.dietary.contains(tag))
}

/// Applies the selected filters to the rendered cards.
///
/// `cards` and `products` share catalog order; the i-th card belongs to the i-th
/// product.
pub fn apply(selected: &[String], products: &[Product], cards: &mut [ProductCard]) {
    for (card, product) in cards.iter_mut().zip(products) {
        card.visible = matches(selected, product);
    }
}
