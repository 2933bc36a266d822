//! The opaque rendering target.

use crate::view::cart::CartView;
use crate::view::catalog::ProductCard;

/// A display surface the storefront renders into.
///
/// Each method corresponds to one region of the page: the product grid, the dietary
/// filter checkboxes, the cart summary, the shipping notice, and the payment details
/// panel. An implementation that lacks a region simply ignores the call: rendering
/// to an absent target is a no-op, never an error.
///
/// Implementations receive plain view models; markup and layout are entirely theirs.
pub trait Surface {
    /// Replaces the product grid with the given cards. Cards carry their own
    /// visibility flag; hidden cards stay in the list so positions are stable.
    fn product_grid(&mut self, cards: &[ProductCard]);

    /// Replaces the dietary filter options.
    fn dietary_filters(&mut self, tags: &[String]);

    /// Replaces the cart summary (rows, count, grand total).
    fn cart_summary(&mut self, view: &CartView);

    /// Shows or hides the local-pickup shipping notice.
    fn shipping_notice(&mut self, visible: bool);

    /// Shows the payment instructions for the selected method, or hides the panel
    /// when `None`.
    fn payment_details(&mut self, instructions: Option<&'static str>);
}
