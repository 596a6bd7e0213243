//! Cart Store
//!
//! Owns the session's [`Cart`] and keeps a [`KeyValueStore`] in step with it. Every mutation is
//! written through immediately; nothing is batched and the last write wins.

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    cart::{
        AddOutcome, Cart, CartError,
        snapshot::{CartSnapshot, SnapshotError},
    },
    products::{Product, ProductId},
    storage::{KeyValueStore, StorageError},
};

/// Default storage key for the cart.
pub const DEFAULT_CART_KEY: &str = "spanner.cart";

/// Result of adding a product through the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddReceipt {
    /// What happened to the line item
    pub outcome: AddOutcome,

    /// Whether this was the first add of the session, so the cart should be revealed
    pub reveal_cart: bool,
}

/// Single writer for a persisted cart.
#[derive(Debug)]
pub struct CartStore<S: KeyValueStore> {
    storage: S,
    key: String,
    cart: Cart,
    has_added: bool,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the cart stored under `key`.
    ///
    /// Missing, unreadable, malformed or foreign-currency data is discarded and an empty cart in
    /// `currency` is used instead.
    pub fn open(storage: S, key: impl Into<String>, currency: &'static Currency) -> Self {
        let key = key.into();
        let cart = load(&storage, &key, currency).unwrap_or_else(|| Cart::new(currency));

        Self {
            storage,
            key,
            cart,
            has_added: false,
        }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add one unit of a product and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CurrencyMismatch`] if the product is priced in another currency.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: &Product) -> Result<AddReceipt, CartError> {
        let outcome = self.cart.add_item(product)?;
        let reveal_cart = !self.has_added;

        self.has_added = true;
        self.persist();

        Ok(AddReceipt {
            outcome,
            reveal_cart,
        })
    }

    /// Set a line item's quantity and persist. Below one removes the item.
    #[tracing::instrument(skip(self), fields(product_id = %id))]
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        self.cart.update_quantity(id, quantity);
        self.persist();
    }

    /// Remove a line item and persist.
    #[tracing::instrument(skip(self), fields(product_id = %id))]
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let removed = self.cart.remove_item(id).is_some();
        self.persist();

        removed
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Empty the cart once the order service has confirmed payment.
    pub fn complete_checkout(&mut self) {
        info!(
            key = %self.key,
            items = self.cart.len(),
            "checkout completed, clearing cart"
        );

        self.clear();
    }

    /// Give the storage back.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        match self.write_snapshot() {
            Ok(()) => debug!(key = %self.key, items = self.cart.len(), "cart persisted"),
            Err(err) => warn!(key = %self.key, error = %err, "failed to persist cart"),
        }
    }

    fn write_snapshot(&mut self) -> Result<(), PersistError> {
        let json = CartSnapshot::from_cart(&self.cart).to_json()?;
        self.storage.set(&self.key, &json)?;

        Ok(())
    }
}

/// Reasons a write-through can fail. Logged, never returned to callers.
#[derive(Debug, Error)]
enum PersistError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn load(storage: &impl KeyValueStore, key: &str, currency: &'static Currency) -> Option<Cart> {
    let json = match storage.get(key) {
        Ok(json) => json?,
        Err(err) => {
            warn!(key, error = %err, "failed to read stored cart, starting empty");
            return None;
        }
    };

    let decoded = match CartSnapshot::decode(&json, currency) {
        Ok(decoded) => decoded,
        Err(err) => {
            warn!(key, error = %err, "discarding malformed stored cart");
            return None;
        }
    };

    if decoded.was_migrated() {
        info!(
            key,
            from = decoded.source_version,
            to = decoded.snapshot.version,
            "migrated stored cart"
        );
    }

    match decoded.snapshot.into_cart() {
        Ok(cart) if cart.currency() == currency => Some(cart),
        Ok(cart) => {
            warn!(
                key,
                stored = cart.currency().iso_alpha_code,
                expected = currency.iso_alpha_code,
                "discarding stored cart in another currency"
            );
            None
        }
        Err(err) => {
            warn!(key, error = %err, "discarding invalid stored cart");
            None
        }
    }
}
