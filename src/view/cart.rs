//! Cart summary view models.

use crate::model::{LineItem, LineItemId};

/// Placeholder message a surface shows when the cart has no rows.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// One rendered cart row.
#[derive(Debug, Clone)]
pub struct CartRow {
    pub line_id: LineItemId,
    /// Display title: emoji glyph followed by the product name.
    pub title: String,
    pub size: String,
    pub flavor: Option<String>,
    pub notes: Option<String>,
    pub quantity: u32,
    /// Line total (unit price × quantity), formatted to two decimals, e.g. `$70.00`.
    pub line_total: String,
}

/// The rendered cart summary.
#[derive(Debug, Clone)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    /// Number of line items, not summed quantity.
    pub count: usize,
    /// Grand total formatted to two decimals, e.g. `$70.00`.
    pub total: String,
}

/// Projects the cart into its summary view.
///
/// An empty cart yields zero rows, a count of 0, and a `$0.00` total; the surface is
/// expected to show [`EMPTY_CART_MESSAGE`] in place of the rows.
pub fn render(items: &[LineItem]) -> CartView {
    let mut total = 0.0;
    let mut rows = Vec::with_capacity(items.len());

    for item in items {
        let line_total = item.line_total();
        total += line_total;
        rows.push(CartRow {
            line_id: item.id.clone(),
            title: format!("{} {}", item.emoji, item.name),
            size: item.size.clone(),
            flavor: item.flavor.clone(),
            notes: item.notes.clone(),
            quantity: item.quantity,
            line_total: format!("${line_total:.2}"),
        });
    }

    CartView {
        rows,
        count: items.len(),
        total: format!("${total:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn item(id: u32, unit_price: f64, quantity: u32) -> LineItem {
        LineItem {
            id: LineItemId(id),
            product_id: ProductId(1),
            name: "Cake".to_string(),
            emoji: "🍰".to_string(),
            size: "M".to_string(),
            flavor: Some("Vanilla".to_string()),
            notes: None,
            quantity,
            unit_price,
            can_ship: true,
        }
    }

    #[test]
    fn empty_cart_renders_zero_totals() {
        let view = render(&[]);
        assert!(view.rows.is_empty());
        assert_eq!(view.count, 0);
        assert_eq!(view.total, "$0.00");
    }

    #[test]
    fn line_totals_and_grand_total_are_formatted() {
        let view = render(&[item(1, 35.0, 2), item(2, 4.5, 3)]);
        assert_eq!(view.count, 2);
        assert_eq!(view.rows[0].line_total, "$70.00");
        assert_eq!(view.rows[1].line_total, "$13.50");
        assert_eq!(view.total, "$83.50");
    }

    #[test]
    fn count_is_line_items_not_summed_quantity() {
        let view = render(&[item(1, 10.0, 5)]);
        assert_eq!(view.count, 1);
    }

    #[test]
    fn rows_preserve_cart_order() {
        let view = render(&[item(3, 1.0, 1), item(1, 1.0, 1), item(2, 1.0, 1)]);
        let ids: Vec<u32> = view.rows.iter().map(|r| r.line_id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
