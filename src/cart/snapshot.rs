//! Cart Snapshots
//!
//! The persisted form of a cart. Snapshots are versioned JSON documents:
//!
//! ```json
//! {"version":2,"currency":"INR","items":[{"id":"p1","title":"Brake Pad","unit_price_minor":149900,"quantity":1}]}
//! ```
//!
//! Version 1 carts (a bare JSON array of `{id, title, price, image, quantity}` with `price` in
//! major units) are still read and migrated on load.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError, line_item::CartLineItem},
    money::{self, MoneyParseError},
    products::ProductId,
};

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 2;

/// The bare-array schema version.
pub const LEGACY_SNAPSHOT_VERSION: u32 = 1;

/// Snapshot encoding and decoding errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON encoding or decoding error
    #[error("Invalid cart snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by a newer or unknown schema.
    #[error("Unsupported cart snapshot version: {0}")]
    UnsupportedVersion(u32),

    /// A legacy price could not be converted to minor units.
    #[error("Invalid price for item {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error(transparent)]
    Currency(#[from] MoneyParseError),

    /// The decoded items do not form a valid cart.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Versioned, serialisable form of a [`Cart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Schema version
    pub version: u32,

    /// ISO currency code of every price in the snapshot
    pub currency: String,

    /// Line items in display order
    pub items: Vec<LineItemRecord>,
}

/// A persisted line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRecord {
    /// Product identifier
    pub id: String,

    /// Title captured at add time
    pub title: String,

    /// Unit price captured at add time, in minor units
    pub unit_price_minor: i64,

    /// Product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Quantity
    pub quantity: i64,
}

/// A version 1 line item.
#[derive(Debug, Deserialize)]
struct LegacyLineItem {
    id: String,
    title: String,
    #[serde(alias = "unitPrice")]
    price: Decimal,
    #[serde(default, alias = "imageUrl", alias = "image_url")]
    image: Option<String>,
    quantity: i64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredCart {
    Versioned(CartSnapshot),
    Legacy(Vec<LegacyLineItem>),
}

/// A decoded snapshot and the schema version it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Snapshot in the current schema
    pub snapshot: CartSnapshot,

    /// Version found in storage
    pub source_version: u32,
}

impl Decoded {
    /// Whether the stored data was in an older schema.
    pub fn was_migrated(&self) -> bool {
        self.source_version != SNAPSHOT_VERSION
    }
}

impl CartSnapshot {
    /// Capture the current state of a cart.
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            currency: cart.currency().iso_alpha_code.to_string(),
            items: cart
                .items()
                .iter()
                .map(|item| LineItemRecord {
                    id: item.id().as_str().to_string(),
                    title: item.title().to_string(),
                    unit_price_minor: item.unit_price().to_minor_units(),
                    image_url: item.image_url().map(str::to_string),
                    quantity: i64::from(item.quantity()),
                })
                .collect(),
        }
    }

    /// Encode as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode JSON in any supported schema, migrating to the current one.
    ///
    /// Legacy snapshots carry no currency, so they are read as `legacy_currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the version is unsupported, or a legacy price
    /// cannot be represented in minor units. Legacy items with a negative price are dropped.
    pub fn decode(json: &str, legacy_currency: &'static Currency) -> Result<Decoded, SnapshotError> {
        match serde_json::from_str::<StoredCart>(json)? {
            StoredCart::Versioned(snapshot) if snapshot.version == SNAPSHOT_VERSION => Ok(Decoded {
                snapshot,
                source_version: SNAPSHOT_VERSION,
            }),
            StoredCart::Versioned(snapshot) => {
                Err(SnapshotError::UnsupportedVersion(snapshot.version))
            }
            StoredCart::Legacy(items) => Ok(Decoded {
                snapshot: migrate_legacy(items, legacy_currency)?,
                source_version: LEGACY_SNAPSHOT_VERSION,
            }),
        }
    }

    /// Rebuild the cart. Items with a quantity below one or a negative unit price are dropped and
    /// repeated ids merged.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency code is unknown.
    pub fn into_cart(self) -> Result<Cart, SnapshotError> {
        let currency = money::currency(&self.currency)?;

        let items = self.items.into_iter().filter_map(|record| {
            if record.unit_price_minor < 0 {
                return None;
            }

            let quantity = NonZeroU32::new(u32::try_from(record.quantity.max(0)).unwrap_or(u32::MAX))?;

            Some(CartLineItem::new(
                ProductId::new(record.id),
                record.title,
                Money::from_minor(record.unit_price_minor, currency),
                record.image_url,
                quantity,
            ))
        });

        Ok(Cart::with_items(items, currency)?)
    }
}

fn migrate_legacy(
    items: Vec<LegacyLineItem>,
    currency: &'static Currency,
) -> Result<CartSnapshot, SnapshotError> {
    let items = items
        .into_iter()
        .filter(|item| item.price >= Decimal::ZERO)
        .map(|item| {
            let unit_price_minor = money::minor_units_from_major(item.price, currency)
                .ok_or_else(|| SnapshotError::InvalidPrice(item.id.clone()))?;

            Ok(LineItemRecord {
                id: item.id,
                title: item.title,
                unit_price_minor,
                image_url: item.image,
                quantity: item.quantity,
            })
        })
        .collect::<Result<Vec<_>, SnapshotError>>()?;

    Ok(CartSnapshot {
        version: SNAPSHOT_VERSION,
        currency: currency.iso_alpha_code.to_string(),
        items,
    })
}
