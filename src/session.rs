//! The storefront session: one user's view of the catalog and cart.
//!
//! A [`Session`] owns the typed store clients, the catalog snapshot taken at load
//! time, the per-card form state (selected size and flavor, notes, quantity), and the
//! active dietary filter selection. Each user-triggered event maps to one method:
//!
//! | Event | Method |
//! |-------|--------|
//! | catalog-load-complete | [`Session::catalog_loaded`] |
//! | size-changed | [`Session::size_changed`] |
//! | flavor-changed | [`Session::flavor_changed`] |
//! | notes-changed | [`Session::notes_changed`] |
//! | quantity-changed | [`Session::quantity_changed`] |
//! | add-to-cart | [`Session::add_to_cart`] |
//! | remove-from-cart | [`Session::remove_item`] |
//! | clear-cart | [`Session::clear_cart`] |
//! | dietary-checkbox-changed | [`Session::dietary_changed`] |
//! | payment-method-selected | [`Session::payment_selected`] |
//!
//! Every mutation is followed by a total re-render of the affected view; there are no
//! pending or intermediate states.

use crate::cart_actor::CartError;
use crate::catalog_actor::CatalogError;
use crate::clients::{CartClient, CatalogClient, StoreHandle};
use crate::model::{coerce_quantity, LineItemCreate, LineItemId, Product, ProductId};
use crate::view::catalog::{refresh_price, render_cards, ProductCard};
use crate::view::{cart, filter, payment, shipping, Surface};
use tracing::{debug, info, instrument, warn};

/// One user's storefront session.
pub struct Session<S: Surface> {
    catalog: CatalogClient,
    cart: CartClient,
    surface: S,
    products: Vec<Product>,
    cards: Vec<ProductCard>,
    selected_tags: Vec<String>,
}

impl<S: Surface> Session<S> {
    pub fn new(catalog: CatalogClient, cart: CartClient, surface: S) -> Self {
        Self {
            catalog,
            cart,
            surface,
            products: Vec::new(),
            cards: Vec::new(),
            selected_tags: Vec::new(),
        }
    }

    /// The rendered cards, in catalog order. Mainly useful to drive a surface's
    /// input handling and to assert on form state in tests.
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    /// The catalog snapshot taken at [`Session::catalog_loaded`] time.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The surface this session renders into.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handles catalog-load-complete: snapshots the catalog, builds the product
    /// cards, and renders the grid and the dietary filter options.
    #[instrument(skip(self))]
    pub async fn catalog_loaded(&mut self) -> Result<(), CatalogError> {
        self.products = self.catalog.list().await?;
        self.cards = render_cards(&self.products);
        info!(products = self.products.len(), "Catalog view built");

        self.surface.product_grid(&self.cards);
        self.surface.dietary_filters(&filter::collect_tags(&self.products));
        Ok(())
    }

    /// Handles size-changed on one card: updates the selection, re-derives the
    /// displayed price, and re-renders the grid. Unknown card IDs are ignored.
    #[instrument(skip(self))]
    pub fn size_changed(&mut self, product_id: &ProductId, size: &str) {
        let Some(pos) = self.card_position(product_id) else {
            warn!(%product_id, "size_changed for unknown card");
            return;
        };
        self.cards[pos].selected_size = size.to_string();
        refresh_price(&mut self.cards[pos], &self.products[pos]);
        self.surface.product_grid(&self.cards);
    }

    /// Handles flavor-changed on one card. Unknown card IDs are ignored.
    #[instrument(skip(self))]
    pub fn flavor_changed(&mut self, product_id: &ProductId, flavor: &str) {
        let Some(pos) = self.card_position(product_id) else {
            warn!(%product_id, "flavor_changed for unknown card");
            return;
        };
        self.cards[pos].selected_flavor = Some(flavor.to_string());
    }

    /// Handles edits to a card's flavor-notes field. Unknown card IDs are ignored.
    #[instrument(skip(self))]
    pub fn notes_changed(&mut self, product_id: &ProductId, notes: &str) {
        let Some(pos) = self.card_position(product_id) else {
            warn!(%product_id, "notes_changed for unknown card");
            return;
        };
        self.cards[pos].notes = notes.to_string();
    }

    /// Handles edits to a card's quantity field. Raw input is coerced: non-numeric,
    /// zero, and negative values become 1. Unknown card IDs are ignored.
    #[instrument(skip(self))]
    pub fn quantity_changed(&mut self, product_id: &ProductId, raw: &str) {
        let Some(pos) = self.card_position(product_id) else {
            warn!(%product_id, "quantity_changed for unknown card");
            return;
        };
        self.cards[pos].quantity = coerce_quantity(raw);
    }

    /// Handles add-to-cart on one card: appends a line item built from the card's
    /// current form state, resets the form (quantity 1, notes cleared), and
    /// re-renders the cart summary.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&mut self, product_id: &ProductId) -> Result<LineItemId, CartError> {
        let pos = self
            .card_position(product_id)
            .ok_or_else(|| CartError::UnknownProduct(product_id.clone()))?;

        let card = &self.cards[pos];
        let notes = card.notes.trim();
        let selection = LineItemCreate {
            product_id: product_id.clone(),
            size: card.selected_size.clone(),
            flavor: card.selected_flavor.clone(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            quantity: card.quantity,
        };

        debug!(?selection, "Adding to cart");
        let line_id = self.cart.add_item(selection).await?;

        let card = &mut self.cards[pos];
        card.quantity = 1;
        card.notes.clear();

        self.refresh_cart().await?;
        Ok(line_id)
    }

    /// Handles remove-from-cart: removes the line item and re-renders the summary.
    #[instrument(skip(self))]
    pub async fn remove_item(&mut self, line_id: LineItemId) -> Result<(), CartError> {
        self.cart.remove(line_id).await?;
        self.refresh_cart().await
    }

    /// Empties the cart and re-renders the summary.
    #[instrument(skip(self))]
    pub async fn clear_cart(&mut self) -> Result<(), CartError> {
        self.cart.clear().await?;
        self.refresh_cart().await
    }

    /// Handles dietary-checkbox-changed: stores the selection, re-applies the filter
    /// to the cards, and re-renders the grid.
    #[instrument(skip(self))]
    pub fn dietary_changed(&mut self, selected: Vec<String>) {
        self.selected_tags = selected;
        filter::apply(&self.selected_tags, &self.products, &mut self.cards);
        self.surface.product_grid(&self.cards);
    }

    /// Handles payment-method-selected: shows the instructions for a known method,
    /// hides the panel for anything else.
    #[instrument(skip(self))]
    pub fn payment_selected(&mut self, method: &str) {
        self.surface.payment_details(payment::panel_for(method));
    }

    /// Re-renders the cart summary and runs the shipping-eligibility check.
    async fn refresh_cart(&mut self) -> Result<(), CartError> {
        let items = self.cart.list().await?;
        self.surface.cart_summary(&cart::render(&items));
        self.surface.shipping_notice(shipping::requires_pickup(&items));
        Ok(())
    }

    /// Index of the card, and of its product (the vectors share catalog order).
    fn card_position(&self, product_id: &ProductId) -> Option<usize> {
        self.cards.iter().position(|c| &c.product_id == product_id)
    }
}
