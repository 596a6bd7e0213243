//! Spanner prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        AddOutcome, Cart, CartError,
        line_item::CartLineItem,
        receipt::{ReceiptError, write_cart},
        snapshot::{CartSnapshot, SnapshotError},
        store::{AddReceipt, CartStore, DEFAULT_CART_KEY},
    },
    discounts::{Coupon, CouponKind, DiscountError},
    fixtures::{Fixture, FixtureError},
    pricing::{CartTotals, PricingError},
    products::{Product, ProductId},
    shipping::{ShippingPolicy, ShippingPolicyError},
    storage::{FileStore, KeyValueStore, MemoryStore, StorageError},
    vehicles::{
        FLOOR_YEAR, FuelType, ModelSpec, VehicleCatalog, VehicleError,
        fitment::{Fitment, filter_compatible},
        selection::{SelectionError, VehicleSelection},
    },
};
