//! Shopping cart built on shelf.
//!
//! A cart holds catalog guitars with bounded quantities (1 to 5), derives its
//! total, and is written to durable storage after every change.
//!
//! - Pure, copy-on-write transitions on [`CartState`]
//! - A reducer that persists only committed changes
//! - Restore from the previous session, falling back to an empty cart
//!
//! # Quick Start
//!
//! ```no_run
//! use cart::{CartAction, CartEnvironment, CartReducer, Guitar};
//! use shelf_runtime::{Config, Store};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let storage = Arc::new(Config::from_env().storage());
//! let store = Store::restore(CartReducer::new(), CartEnvironment::default(), storage);
//!
//! store
//!     .send(CartAction::AddToCart {
//!         guitar: Guitar::new(1, "Lukather", 299),
//!     })
//!     .await;
//!
//! let total = store.state(cart::CartState::total).await;
//! println!("Total: ${total}");
//! # }
//! ```

pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use reducer::{CartEnvironment, CartReducer};
pub use types::{
    CartAction, CartError, CartItem, CartState, DecreasePolicy, Guitar, GuitarId, MAX_QUANTITY,
    MIN_QUANTITY,
};
