//! Pricing
//!
//! Pure reductions over line items. Nothing here is cached; every total is recomputed from the
//! items it is given.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::line_item::CartLineItem,
    discounts::{Coupon, DiscountError},
    shipping::ShippingPolicy,
};

/// Errors that can occur when pricing a set of line items.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// The shipping policy is expressed in a different currency from the items.
    #[error("Shipping policy has currency {policy_currency}, but cart has currency {cart_currency}")]
    ShippingCurrencyMismatch {
        /// Policy currency code
        policy_currency: &'static str,
        /// Cart currency code
        cart_currency: &'static str,
    },

    /// A coupon amount or minimum subtotal is expressed in a different currency from the items.
    #[error("Coupon {code} has currency {coupon_currency}, but cart has currency {cart_currency}")]
    CouponCurrencyMismatch {
        /// Coupon code
        code: String,
        /// Coupon currency code
        coupon_currency: &'static str,
        /// Cart currency code
        cart_currency: &'static str,
    },

    /// The coupon discount could not be calculated.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// Total number of units across all line items.
pub fn item_count(items: &[CartLineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity())).sum()
}

/// Sum of unit price times quantity across all line items, in minor units.
pub fn subtotal_minor(items: &[CartLineItem]) -> i64 {
    items
        .iter()
        .fold(0_i64, |acc, item| acc.saturating_add(item.line_total_minor()))
}

/// Shipping cost under `policy` for the subtotal of `items`.
///
/// # Errors
///
/// Returns [`PricingError::ShippingCurrencyMismatch`] if `policy` is not in `currency`.
pub fn shipping_cost(
    items: &[CartLineItem],
    currency: &'static Currency,
    policy: &ShippingPolicy,
) -> Result<Money<'static, Currency>, PricingError> {
    ensure_shipping_currency(policy, currency)?;

    Ok(Money::from_minor(
        policy.shipping_cost_minor(subtotal_minor(items)),
        currency,
    ))
}

/// Every derived figure for a cart at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals {
    /// Total number of units
    pub item_count: u64,

    /// Sum of line totals
    pub subtotal: Money<'static, Currency>,

    /// Coupon discount taken off the subtotal
    pub discount: Money<'static, Currency>,

    /// Shipping cost, decided on the undiscounted subtotal
    pub shipping: Money<'static, Currency>,

    /// Subtotal minus discount plus shipping
    pub grand_total: Money<'static, Currency>,

    /// Code of the coupon that was applied, if any
    pub coupon_code: Option<String>,
}

/// Calculate the totals for a set of line items.
///
/// # Errors
///
/// Returns a [`PricingError`] if the shipping policy or coupon amounts are not in `currency`,
/// or if the coupon discount cannot be represented in minor units.
pub fn calculate_totals(
    items: &[CartLineItem],
    currency: &'static Currency,
    shipping: &ShippingPolicy,
    coupon: Option<&Coupon>,
) -> Result<CartTotals, PricingError> {
    ensure_shipping_currency(shipping, currency)?;

    if let Some(coupon) = coupon {
        ensure_coupon_currency(coupon, currency)?;
    }

    let subtotal = subtotal_minor(items);
    let shipping_cost = shipping.shipping_cost_minor(subtotal);

    let discount = match coupon {
        Some(coupon) => coupon.discount_minor(subtotal)?,
        None => 0,
    };

    let grand_total = subtotal
        .saturating_sub(discount)
        .saturating_add(shipping_cost);

    Ok(CartTotals {
        item_count: item_count(items),
        subtotal: Money::from_minor(subtotal, currency),
        discount: Money::from_minor(discount, currency),
        shipping: Money::from_minor(shipping_cost, currency),
        grand_total: Money::from_minor(grand_total, currency),
        coupon_code: coupon.map(|coupon| coupon.code().to_string()),
    })
}

fn ensure_shipping_currency(
    policy: &ShippingPolicy,
    currency: &'static Currency,
) -> Result<(), PricingError> {
    if policy.currency() == currency {
        Ok(())
    } else {
        Err(PricingError::ShippingCurrencyMismatch {
            policy_currency: policy.currency().iso_alpha_code,
            cart_currency: currency.iso_alpha_code,
        })
    }
}

fn ensure_coupon_currency(
    coupon: &Coupon,
    currency: &'static Currency,
) -> Result<(), PricingError> {
    match coupon.currencies().find(|found| *found != currency) {
        Some(found) => Err(PricingError::CouponCurrencyMismatch {
            code: coupon.code().to_string(),
            coupon_currency: found.iso_alpha_code,
            cart_currency: currency.iso_alpha_code,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use decimal_percentage::Percentage;
    use rusty_money::iso::{INR, USD};
    use testresult::TestResult;

    use super::*;
    use crate::discounts::CouponKind;

    fn line(id: &str, price_minor: i64, quantity: u32) -> TestResult<CartLineItem> {
        Ok(CartLineItem::new(
            id.into(),
            id.to_string(),
            Money::from_minor(price_minor, INR),
            None,
            NonZeroU32::try_from(quantity)?,
        ))
    }

    #[test]
    fn item_count_sums_quantities() -> TestResult {
        let items = [line("a", 100, 2)?, line("b", 200, 3)?];

        assert_eq!(item_count(&items), 5);

        Ok(())
    }

    #[test]
    fn subtotal_sums_line_totals() -> TestResult {
        let items = [line("a", 50_000, 3)?, line("b", 1_999, 1)?];

        assert_eq!(subtotal_minor(&items), 151_999);

        Ok(())
    }

    #[test]
    fn subtotal_of_no_items_is_zero() {
        assert_eq!(subtotal_minor(&[]), 0);
    }

    #[test]
    fn subtotal_saturates_instead_of_overflowing() -> TestResult {
        let items = [line("a", i64::MAX, 2)?, line("b", 1, 1)?];

        assert_eq!(subtotal_minor(&items), i64::MAX);

        Ok(())
    }

    #[test]
    fn totals_below_threshold_include_fee() -> TestResult {
        let items = [line("a", 999_900, 1)?];

        let totals = calculate_totals(&items, INR, &ShippingPolicy::default(), None)?;

        assert_eq!(totals.subtotal, Money::from_minor(999_900, INR));
        assert_eq!(totals.shipping, Money::from_minor(9_900, INR));
        assert_eq!(totals.grand_total, Money::from_minor(1_009_800, INR));
        assert_eq!(totals.discount, Money::from_minor(0, INR));
        assert_eq!(totals.coupon_code, None);

        Ok(())
    }

    #[test]
    fn totals_apply_coupon_after_shipping_decision() -> TestResult {
        let items = [line("a", 1_000_000, 1)?];
        let coupon = Coupon::new("WELCOME10", CouponKind::PercentageOff(Percentage::from(0.1)));

        let totals = calculate_totals(&items, INR, &ShippingPolicy::default(), Some(&coupon))?;

        assert_eq!(totals.shipping, Money::from_minor(0, INR));
        assert_eq!(totals.discount, Money::from_minor(100_000, INR));
        assert_eq!(totals.grand_total, Money::from_minor(900_000, INR));
        assert_eq!(totals.coupon_code.as_deref(), Some("WELCOME10"));

        Ok(())
    }

    #[test]
    fn totals_reject_coupon_minimum_in_another_currency() -> TestResult {
        let items = [line("a", 50_000, 1)?];
        let coupon = Coupon::new("WELCOME10", CouponKind::PercentageOff(Percentage::from(0.1)))
            .with_minimum_subtotal(Money::from_minor(1_000, USD));

        let result = calculate_totals(&items, INR, &ShippingPolicy::default(), Some(&coupon));

        assert_eq!(
            result,
            Err(PricingError::CouponCurrencyMismatch {
                code: "WELCOME10".to_string(),
                coupon_currency: "USD",
                cart_currency: "INR",
            })
        );

        Ok(())
    }

    #[test]
    fn shipping_cost_rejects_policy_in_another_currency() -> TestResult {
        let items = [line("a", 50_000, 1)?];
        let policy =
            ShippingPolicy::new(Money::from_minor(100_000, USD), Money::from_minor(1_500, USD))?;

        assert_eq!(
            shipping_cost(&items, INR, &policy),
            Err(PricingError::ShippingCurrencyMismatch {
                policy_currency: "USD",
                cart_currency: "INR",
            })
        );
        assert_eq!(
            shipping_cost(&items, INR, &ShippingPolicy::default())?,
            Money::from_minor(9_900, INR)
        );

        Ok(())
    }
}
