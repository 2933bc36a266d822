//! Storefront demo binary.
//!
//! Builds the store actors, loads the catalog from `CATALOG_URL`, and walks one
//! scripted session (browse, pick a size, add to cart, choose a payment method),
//! rendering every view to the terminal.

use storefront::catalog_actor::{load, CatalogLoader};
use storefront::lifecycle::{setup_tracing, Config, Storefront};
use storefront::session::Session;
use storefront::view::{CartView, ProductCard, Surface, ALL_METHODS, EMPTY_CART_MESSAGE, PICKUP_NOTICE};
use tracing::{info, warn, Instrument};

/// Renders every view region as plain terminal output.
struct TerminalSurface;

impl Surface for TerminalSurface {
    fn product_grid(&mut self, cards: &[ProductCard]) {
        println!("── Products ──");
        for card in cards.iter().filter(|c| c.visible) {
            println!("  {}  {}", card.title, card.price_label);
            println!("    sizes: {} (selected: {})", card.sizes.join(", "), card.selected_size);
            if let Some(flavor) = &card.selected_flavor {
                println!("    flavors: {} (selected: {})", card.flavors.join(", "), flavor);
            }
        }
    }

    fn dietary_filters(&mut self, tags: &[String]) {
        if !tags.is_empty() {
            println!("── Dietary filters: {} ──", tags.join(", "));
        }
    }

    fn cart_summary(&mut self, view: &CartView) {
        println!("── Cart ({} items, total {}) ──", view.count, view.total);
        if view.rows.is_empty() {
            println!("  {EMPTY_CART_MESSAGE}");
            return;
        }
        for row in &view.rows {
            println!("  {} — size {}, qty {}, {}", row.title, row.size, row.quantity, row.line_total);
            if let Some(flavor) = &row.flavor {
                println!("    flavor: {flavor}");
            }
            if let Some(notes) = &row.notes {
                println!("    notes: {notes}");
            }
        }
    }

    fn shipping_notice(&mut self, visible: bool) {
        if visible {
            println!("  {PICKUP_NOTICE}");
        }
    }

    fn payment_details(&mut self, instructions: Option<&'static str>) {
        match instructions {
            Some(text) => println!("── Payment: {text} ──"),
            None => println!("── Payment: (no method selected) ──"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting storefront");
    let config = Config::from_env()?;

    let system = Storefront::new();
    let loader = CatalogLoader::new(&config.catalog_url, config.timeout_secs, &config.user_agent)
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("catalog_load");
    let products = async {
        info!(url = %config.catalog_url, "Fetching catalog");
        load(&loader, &system.catalog_client).await
    }
    .instrument(span)
    .await;

    let mut session = Session::new(
        system.catalog_client.clone(),
        system.cart_client.clone(),
        TerminalSurface,
    );
    session.catalog_loaded().await.map_err(|e| e.to_string())?;

    // Scripted walk-through: pick the first product, switch to its last size, add two,
    // then show the payment options.
    if let Some(first) = products.first() {
        let product_id = first.id.clone();

        if let Some(last_size) = first.sizes.last().cloned() {
            session.size_changed(&product_id, &last_size);
        }
        session.quantity_changed(&product_id, "2");

        let span = tracing::info_span!("cart_demo");
        async {
            match session.add_to_cart(&product_id).await {
                Ok(line_id) => info!(%line_id, "Added to cart"),
                Err(e) => warn!(error = %e, "Add to cart failed"),
            }
        }
        .instrument(span)
        .await;

        for method in ALL_METHODS {
            session.payment_selected(method.label());
        }
    } else {
        info!("Catalog is empty; nothing to demo");
    }

    drop(session);
    system.shutdown().await?;

    info!("Storefront session complete");
    Ok(())
}
