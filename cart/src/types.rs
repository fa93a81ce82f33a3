//! Domain types for the shopping cart.
//!
//! A cart is an ordered list of catalog guitars, each carrying a quantity
//! between [`MIN_QUANTITY`] and [`MAX_QUANTITY`]. Every transition on
//! [`CartState`] takes `&self` and returns a fresh cart; the previous value is
//! never modified.

use serde::{Deserialize, Serialize};
use shelf_core::snapshot::{Snapshot, SnapshotError};
use std::collections::HashSet;
use thiserror::Error;

/// Smallest quantity a cart item can have
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity a cart item can have
pub const MAX_QUANTITY: u32 = 5;

/// Catalog identifier of a guitar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuitarId(u32);

impl GuitarId {
    /// Creates a `GuitarId` from its catalog number
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the catalog number
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for GuitarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A guitar from the catalog (read-only reference data)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guitar {
    /// Catalog identifier
    pub id: GuitarId,
    /// Display name
    pub name: String,
    /// Image file name
    pub image: String,
    /// Marketing description
    pub description: String,
    /// Unit price in whole currency units
    pub price: u32,
}

impl Guitar {
    /// Creates a guitar with no image or description
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, price: u32) -> Self {
        Self {
            id: GuitarId::new(id),
            name: name.into(),
            image: String::new(),
            description: String::new(),
            price,
        }
    }

    /// Sets the image file name
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A guitar in the cart together with how many of it were added
///
/// Serialized flat: every guitar field plus `quantity`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The catalog guitar
    #[serde(flatten)]
    pub guitar: Guitar,
    /// How many units, always within `MIN_QUANTITY..=MAX_QUANTITY`
    pub quantity: u32,
}

impl CartItem {
    /// A fresh cart line for `guitar` with quantity 1
    #[must_use]
    pub const fn new(guitar: Guitar) -> Self {
        Self {
            guitar,
            quantity: MIN_QUANTITY,
        }
    }

    /// Identity of the line (the guitar's id)
    #[must_use]
    pub const fn id(&self) -> GuitarId {
        self.guitar.id
    }

    /// `quantity × price`
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.guitar.price)
    }
}

/// What decrementing an item already at [`MIN_QUANTITY`] does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecreasePolicy {
    /// Leave the item at the minimum; only an explicit remove drops it
    #[default]
    FloorAtMinimum,
    /// Drop the item, as if its quantity reached zero
    RemoveAtMinimum,
}

/// Broken cart invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Two lines share one guitar id
    #[error("guitar {0} appears more than once")]
    DuplicateItem(GuitarId),

    /// A quantity outside `MIN_QUANTITY..=MAX_QUANTITY`
    #[error("guitar {id} has out-of-bounds quantity {quantity}")]
    QuantityOutOfBounds {
        /// Offending line
        id: GuitarId,
        /// Its quantity
        quantity: u32,
    },
}

/// State of the cart
///
/// Insertion order is the only ordering. Persisted as a bare JSON array of
/// flattened cart items under the `"cart"` key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// Creates an empty cart
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a cart from existing lines, checking every invariant
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] on duplicate ids or out-of-bounds quantities.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CartError> {
        let cart = Self { items };
        cart.check()?;
        Ok(cart)
    }

    fn check(&self) -> Result<(), CartError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id()) {
                return Err(CartError::DuplicateItem(item.id()));
            }
            if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&item.quantity) {
                return Err(CartError::QuantityOutOfBounds {
                    id: item.id(),
                    quantity: item.quantity,
                });
            }
        }
        Ok(())
    }

    /// The cart lines in insertion order
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns a line by guitar id
    #[must_use]
    pub fn get(&self, id: GuitarId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of distinct guitars in the cart
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` iff the cart has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `quantity × price` over every line
    #[must_use]
    pub fn total(&self) -> u64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Sum of quantities over every line
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Adds one unit of `guitar`
    ///
    /// An existing line gains one unit in place unless it is already at
    /// [`MAX_QUANTITY`]; a new guitar is appended with quantity 1.
    #[must_use]
    pub fn add(&self, guitar: &Guitar) -> Self {
        let mut items = self.items.clone();

        match items.iter_mut().find(|item| item.id() == guitar.id) {
            Some(item) if item.quantity >= MAX_QUANTITY => {}
            Some(item) => item.quantity += 1,
            None => items.push(CartItem::new(guitar.clone())),
        }

        Self { items }
    }

    /// Drops the line for `id`, if any
    #[must_use]
    pub fn remove(&self, id: GuitarId) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.id() != id)
                .cloned()
                .collect(),
        }
    }

    /// One more unit of `id`, capped at [`MAX_QUANTITY`]
    #[must_use]
    pub fn increase_quantity(&self, id: GuitarId) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|item| {
                    if item.id() == id && item.quantity < MAX_QUANTITY {
                        CartItem {
                            quantity: item.quantity + 1,
                            ..item.clone()
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        }
    }

    /// One fewer unit of `id`
    ///
    /// Above [`MIN_QUANTITY`] this always decrements. At the minimum,
    /// `policy` decides whether the line stays or goes.
    #[must_use]
    pub fn decrease_quantity(&self, id: GuitarId, policy: DecreasePolicy) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter_map(|item| {
                    if item.id() != id {
                        return Some(item.clone());
                    }
                    if item.quantity > MIN_QUANTITY {
                        return Some(CartItem {
                            quantity: item.quantity - 1,
                            ..item.clone()
                        });
                    }
                    match policy {
                        DecreasePolicy::FloorAtMinimum => Some(item.clone()),
                        DecreasePolicy::RemoveAtMinimum => None,
                    }
                })
                .collect(),
        }
    }

    /// An empty cart
    #[must_use]
    pub const fn clear(&self) -> Self {
        Self::new()
    }
}

impl Snapshot for CartState {
    const STORAGE_KEY: &'static str = "cart";

    fn validate(&self) -> Result<(), SnapshotError> {
        self.check()
            .map_err(|error| SnapshotError::Invalid(error.to_string()))
    }
}

/// Actions for the cart
///
/// Every action is a command from the presentation layer. Commands that
/// cannot apply (unknown id, quantity at a bound) leave the cart unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a catalog guitar
    AddToCart {
        /// Guitar to add
        guitar: Guitar,
    },

    /// Drop a line entirely
    RemoveFromCart {
        /// Line to drop
        id: GuitarId,
    },

    /// One more unit of a line
    IncreaseQuantity {
        /// Line to change
        id: GuitarId,
    },

    /// One fewer unit of a line
    DecreaseQuantity {
        /// Line to change
        id: GuitarId,
    },

    /// Empty the cart
    ClearCart,
}
