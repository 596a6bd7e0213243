//! Cart
//!
//! The shopper's selected items and the totals derived from them.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::line_item::CartLineItem,
    discounts::Coupon,
    pricing::{self, CartTotals, PricingError},
    products::{Product, ProductId},
    shipping::ShippingPolicy,
};

pub mod line_item;
pub mod receipt;
pub mod snapshot;
pub mod store;

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A product's currency differs from the cart currency.
    #[error("Product {product} has currency {product_currency}, but cart has currency {cart_currency}")]
    CurrencyMismatch {
        /// Offending product
        product: ProductId,
        /// Product currency code
        product_currency: &'static str,
        /// Cart currency code
        cart_currency: &'static str,
    },
}

/// What adding a product did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was appended with a quantity of one.
    Inserted,

    /// An existing line item's quantity was incremented.
    Incremented {
        /// Quantity after the increment
        quantity: u32,
    },
}

/// Cart
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Build a cart from existing line items, merging repeated ids into the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CurrencyMismatch`] if an item is priced in another currency.
    pub fn with_items(
        items: impl IntoIterator<Item = CartLineItem>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let mut cart = Self::new(currency);

        for item in items {
            cart.ensure_currency(item.id(), item.unit_price())?;

            if let Some(existing) = cart.items.iter_mut().find(|line| line.id() == item.id()) {
                existing.merge_quantity(item.quantity());
            } else {
                cart.items.push(item);
            }
        }

        Ok(cart)
    }

    /// Cart currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Line items in display order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Look up a line item.
    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart has its quantity incremented; its captured title and price
    /// are left as they were.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CurrencyMismatch`] if the product is priced in another currency.
    pub fn add_item(&mut self, product: &Product) -> Result<AddOutcome, CartError> {
        self.ensure_currency(&product.id, &product.price)?;

        if let Some(existing) = self.items.iter_mut().find(|item| item.id() == &product.id) {
            let quantity = existing.increment();

            return Ok(AddOutcome::Incremented { quantity });
        }

        self.items.push(CartLineItem::from_product(product));

        Ok(AddOutcome::Inserted)
    }

    /// Set a line item's quantity. Anything below one removes the item; values past `u32::MAX`
    /// are clamped. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);

        let Some(quantity) = NonZeroU32::new(clamped) else {
            self.remove_item(id);
            return;
        };

        if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
            item.set_quantity(quantity);
        }
    }

    /// Remove a line item, returning it if it was present.
    pub fn remove_item(&mut self, id: &ProductId) -> Option<CartLineItem> {
        let index = self.position(id)?;

        Some(self.items.remove(index))
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units.
    pub fn item_count(&self) -> u64 {
        pricing::item_count(&self.items)
    }

    /// Sum of unit price times quantity.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        Money::from_minor(pricing::subtotal_minor(&self.items), self.currency)
    }

    /// Shipping cost under `policy` for the current subtotal.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::ShippingCurrencyMismatch`] if `policy` is not in the cart currency.
    pub fn shipping_cost(
        &self,
        policy: &ShippingPolicy,
    ) -> Result<Money<'static, Currency>, PricingError> {
        pricing::shipping_cost(&self.items, self.currency, policy)
    }

    /// Subtotal plus shipping.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::ShippingCurrencyMismatch`] if `policy` is not in the cart currency.
    pub fn grand_total(
        &self,
        policy: &ShippingPolicy,
    ) -> Result<Money<'static, Currency>, PricingError> {
        Ok(self.totals(policy, None)?.grand_total)
    }

    /// Every derived figure, with an optional coupon applied.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the policy or coupon amounts are not in the cart currency,
    /// or if the coupon discount cannot be represented in minor units.
    pub fn totals(
        &self,
        policy: &ShippingPolicy,
        coupon: Option<&Coupon>,
    ) -> Result<CartTotals, PricingError> {
        pricing::calculate_totals(&self.items, self.currency, policy, coupon)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn ensure_currency(
        &self,
        id: &ProductId,
        price: &Money<'static, Currency>,
    ) -> Result<(), CartError> {
        if price.currency() == self.currency {
            Ok(())
        } else {
            Err(CartError::CurrencyMismatch {
                product: id.clone(),
                product_currency: price.currency().iso_alpha_code,
                cart_currency: self.currency.iso_alpha_code,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{INR, JPY, USD};
    use testresult::TestResult;

    use super::*;
    use crate::discounts::CouponKind;

    fn product(id: &str, price_minor: i64) -> Product {
        Product::new(id, format!("Part {id}"), Money::from_minor(price_minor, INR))
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(INR);

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), Money::from_minor(0, INR));
        assert_eq!(cart.currency(), INR);
    }

    #[test]
    fn distinct_adds_create_one_line_each() -> TestResult {
        let mut cart = Cart::new(INR);
        let adds = ["a", "b", "a", "c", "a", "b"];

        for id in adds {
            cart.add_item(&product(id, 100))?;
        }

        assert_eq!(cart.len(), 3);

        for id in ["a", "b", "c"] {
            let expected = adds.iter().filter(|added| **added == id).count();
            let quantity = cart.get(&id.into()).map(CartLineItem::quantity);

            assert_eq!(quantity, Some(u32::try_from(expected)?), "quantity of {id}");
        }

        Ok(())
    }

    #[test]
    fn add_reports_insert_then_increment() -> TestResult {
        let mut cart = Cart::new(INR);

        assert_eq!(cart.add_item(&product("p1", 100))?, AddOutcome::Inserted);
        assert_eq!(
            cart.add_item(&product("p1", 100))?,
            AddOutcome::Incremented { quantity: 2 }
        );

        Ok(())
    }

    #[test]
    fn repeated_add_keeps_captured_price_and_title() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.add_item(&product("p1", 50_000))?;

        let mut repriced = product("p1", 60_000);
        repriced.title = "Renamed".to_string();
        cart.add_item(&repriced)?;

        let item = cart.get(&"p1".into()).ok_or("p1 missing")?;

        assert_eq!(item.unit_price(), &Money::from_minor(50_000, INR));
        assert_eq!(item.title(), "Part p1");
        assert_eq!(item.quantity(), 2);

        Ok(())
    }

    #[test]
    fn items_keep_insertion_order() -> TestResult {
        let mut cart = Cart::new(INR);

        for id in ["c", "a", "b", "a"] {
            cart.add_item(&product(id, 100))?;
        }

        let ids: Vec<&str> = cart.items().iter().map(|item| item.id().as_str()).collect();

        assert_eq!(ids, ["c", "a", "b"]);

        Ok(())
    }

    #[test]
    fn add_rejects_other_currency() {
        let mut cart = Cart::new(INR);
        let product = Product::new("p1", "Imported Part", Money::from_minor(100, USD));

        assert_eq!(
            cart.add_item(&product),
            Err(CartError::CurrencyMismatch {
                product: "p1".into(),
                product_currency: "USD",
                cart_currency: "INR",
            })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_sets_exact_value() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.add_item(&product("p1", 50_000))?;
        cart.add_item(&product("p1", 50_000))?;

        cart.update_quantity(&"p1".into(), 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&"p1".into()).map(CartLineItem::quantity), Some(3));
        assert_eq!(cart.subtotal(), Money::from_minor(150_000, INR));

        Ok(())
    }

    #[test]
    fn update_quantity_below_one_removes() -> TestResult {
        for quantity in [0, -1, i64::MIN] {
            let mut cart = Cart::new(INR);
            cart.add_item(&product("p1", 100))?;
            cart.add_item(&product("p2", 100))?;

            cart.update_quantity(&"p1".into(), quantity);

            assert!(cart.get(&"p1".into()).is_none(), "quantity {quantity}");
            assert_eq!(cart.len(), 1);
        }

        Ok(())
    }

    #[test]
    fn update_quantity_clamps_large_values() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.add_item(&product("p1", 100))?;

        cart.update_quantity(&"p1".into(), i64::MAX);

        assert_eq!(
            cart.get(&"p1".into()).map(CartLineItem::quantity),
            Some(u32::MAX)
        );

        Ok(())
    }

    #[test]
    fn update_quantity_ignores_unknown_id() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.add_item(&product("p1", 100))?;
        let before = cart.clone();

        cart.update_quantity(&"missing".into(), 4);

        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn remove_item_is_noop_when_absent() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.add_item(&product("p1", 100))?;

        assert!(cart.remove_item(&"missing".into()).is_none());
        assert!(cart.remove_item(&"p1".into()).is_some());
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn clear_empties_cart() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.add_item(&product("p1", 100))?;
        cart.add_item(&product("p2", 100))?;

        cart.clear();

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn subtotal_is_stable_across_reads() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.add_item(&product("p1", 12_345))?;
        cart.update_quantity(&"p1".into(), 7);

        let first = cart.subtotal();

        assert_eq!(first, Money::from_minor(86_415, INR));
        assert_eq!(cart.subtotal(), first);

        Ok(())
    }

    #[test]
    fn shipping_switches_off_at_threshold() -> TestResult {
        let policy = ShippingPolicy::default();
        let mut cart = Cart::new(INR);

        cart.add_item(&product("p1", 999_900))?;

        assert_eq!(cart.subtotal(), Money::from_minor(999_900, INR));
        assert_eq!(cart.shipping_cost(&policy)?, Money::from_minor(9_900, INR));
        assert_eq!(cart.grand_total(&policy)?, Money::from_minor(1_009_800, INR));

        cart.add_item(&product("p2", 50_000))?;

        assert_eq!(cart.subtotal(), Money::from_minor(1_049_900, INR));
        assert_eq!(cart.shipping_cost(&policy)?, Money::from_minor(0, INR));
        assert_eq!(cart.grand_total(&policy)?, Money::from_minor(1_049_900, INR));

        Ok(())
    }

    #[test]
    fn pricing_in_a_foreign_currency_is_rejected() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.add_item(&product("coolant", 50_000))?;

        let usd_policy =
            ShippingPolicy::new(Money::from_minor(100_000, USD), Money::from_minor(1_500, USD))?;
        let jpy_policy =
            ShippingPolicy::new(Money::from_minor(10_000, JPY), Money::from_minor(500, JPY))?;
        let usd_coupon =
            Coupon::new("FLAT20", CouponKind::AmountOff(Money::from_minor(2_000, USD)));

        let shipping_mismatch = PricingError::ShippingCurrencyMismatch {
            policy_currency: "USD",
            cart_currency: "INR",
        };

        assert_eq!(cart.shipping_cost(&usd_policy), Err(shipping_mismatch.clone()));
        assert_eq!(cart.grand_total(&usd_policy), Err(shipping_mismatch));
        assert_eq!(
            cart.shipping_cost(&jpy_policy),
            Err(PricingError::ShippingCurrencyMismatch {
                policy_currency: "JPY",
                cart_currency: "INR",
            })
        );
        assert_eq!(
            cart.totals(&ShippingPolicy::default(), Some(&usd_coupon)),
            Err(PricingError::CouponCurrencyMismatch {
                code: "FLAT20".to_string(),
                coupon_currency: "USD",
                cart_currency: "INR",
            })
        );

        Ok(())
    }

    #[test]
    fn with_items_merges_duplicate_ids() -> TestResult {
        let first = CartLineItem::from_product(&product("p1", 100));
        let mut second = CartLineItem::from_product(&product("p1", 999));
        second.set_quantity(NonZeroU32::try_from(2)?);

        let cart = Cart::with_items([first, second], INR)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&"p1".into()).map(CartLineItem::quantity), Some(3));
        assert_eq!(cart.subtotal(), Money::from_minor(300, INR));

        Ok(())
    }
}
