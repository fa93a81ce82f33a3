//! CLI demo for the cart.
//!
//! Restores the cart from the data directory, runs a few commands against it
//! and prints the result. Run it twice to see the previous session come back.

use cart::{CartAction, CartEnvironment, CartReducer, CartState, Guitar, GuitarId};
use shelf_runtime::{Config, Store};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn catalog() -> Vec<Guitar> {
    vec![
        Guitar::new(1, "Lukather", 299)
            .with_image("guitarra_01")
            .with_description("Solid body, twin humbuckers, maple neck."),
        Guitar::new(2, "SRV", 349)
            .with_image("guitarra_02")
            .with_description("Alder body with three single coils."),
        Guitar::new(3, "Borland", 329).with_image("guitarra_03"),
        Guitar::new(4, "VAI", 299).with_image("guitarra_04"),
        Guitar::new(5, "Thompson", 399).with_image("guitarra_05"),
        Guitar::new(6, "White", 329).with_image("guitarra_06"),
    ]
}

fn print_cart(cart: &CartState) {
    if cart.is_empty() {
        println!("  (empty)");
        return;
    }
    for item in cart.items() {
        println!(
            "  {:<10} x{}  ${}",
            item.guitar.name,
            item.quantity,
            item.subtotal()
        );
    }
    println!("  {} units, total ${}", cart.item_count(), cart.total());
}

#[tokio::main]
async fn main() {
    // Load .env file
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();

    shelf_runtime::metrics::register_metrics();

    println!("=== Cart Example ===\n");
    tracing::info!(data_dir = %config.data_dir.display(), "Restoring cart");

    let store = Store::restore(
        CartReducer::new(),
        CartEnvironment::default(),
        Arc::new(config.storage()),
    );

    println!("Restored cart:");
    store.state(print_cart).await;

    let guitars = catalog();

    println!("\nAdding guitars...");
    for guitar in guitars.iter().take(3) {
        store
            .send(CartAction::AddToCart {
                guitar: guitar.clone(),
            })
            .await;
    }
    store
        .send(CartAction::AddToCart {
            guitar: guitars[0].clone(),
        })
        .await;
    store.state(print_cart).await;

    println!("\nMore of the SRV, fewer of the Lukather...");
    store
        .send(CartAction::IncreaseQuantity { id: GuitarId::new(2) })
        .await;
    store
        .send(CartAction::DecreaseQuantity { id: GuitarId::new(1) })
        .await;
    store.state(print_cart).await;

    println!("\nRemoving the Borland...");
    store
        .send(CartAction::RemoveFromCart { id: GuitarId::new(3) })
        .await;
    store.state(print_cart).await;

    println!("\nSnapshot saved to {}", config.data_dir.display());
    println!("\n=== Demo Complete ===");
}
