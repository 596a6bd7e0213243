//! Spanner
//!
//! Spanner is the storefront core of an automotive parts retailer: the shopping cart with its
//! derived totals and write-through persistence, and the vehicle compatibility resolver used to
//! narrow the catalog to parts that fit a shopper's car.

pub mod cart;
pub mod config;
pub mod discounts;
pub mod fixtures;
pub mod money;
pub mod observability;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod shipping;
pub mod storage;
pub mod vehicles;
