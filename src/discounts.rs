//! Discounts
//!
//! Coupons applied to the cart subtotal at checkout time.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Coupon amounts are in a different currency from the subtotal.
    #[error("coupon has currency {coupon_currency}, but subtotal has currency {subtotal_currency}")]
    CurrencyMismatch {
        /// Coupon currency code
        coupon_currency: &'static str,
        /// Subtotal currency code
        subtotal_currency: &'static str,
    },
}

/// What a coupon takes off the subtotal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CouponKind {
    /// Take this fraction of the subtotal off (`0.1` is 10%).
    PercentageOff(Percentage),

    /// Take a fixed amount off.
    AmountOff(Money<'static, Currency>),
}

/// Coupon
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    code: String,
    kind: CouponKind,
    minimum_subtotal: Option<Money<'static, Currency>>,
}

impl Coupon {
    /// Create a coupon with no minimum subtotal.
    pub fn new(code: impl Into<String>, kind: CouponKind) -> Self {
        Self {
            code: code.into(),
            kind,
            minimum_subtotal: None,
        }
    }

    /// Only apply the coupon once the subtotal reaches `minimum`.
    #[must_use]
    pub fn with_minimum_subtotal(mut self, minimum: Money<'static, Currency>) -> Self {
        self.minimum_subtotal = Some(minimum);
        self
    }

    /// Coupon code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Discount kind
    pub fn kind(&self) -> &CouponKind {
        &self.kind
    }

    /// Minimum subtotal, if any
    pub fn minimum_subtotal(&self) -> Option<&Money<'static, Currency>> {
        self.minimum_subtotal.as_ref()
    }

    /// Currencies the coupon's amounts are expressed in. Empty for a percentage coupon with no
    /// minimum.
    pub fn currencies(&self) -> impl Iterator<Item = &'static Currency> {
        let amount = match &self.kind {
            CouponKind::AmountOff(amount) => Some(amount.currency()),
            CouponKind::PercentageOff(_) => None,
        };

        amount
            .into_iter()
            .chain(self.minimum_subtotal.as_ref().map(Money::currency))
    }

    /// Discount in minor units for a subtotal in minor units, clamped to `0..=subtotal`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::PercentConversion`] if a percentage discount cannot be
    /// represented in minor units.
    pub fn discount_minor(&self, subtotal_minor: i64) -> Result<i64, DiscountError> {
        let subtotal_minor = subtotal_minor.max(0);

        if self
            .minimum_subtotal
            .is_some_and(|minimum| subtotal_minor < minimum.to_minor_units())
        {
            return Ok(0);
        }

        let discount = match self.kind {
            CouponKind::PercentageOff(percent) => percent_of_minor(percent, subtotal_minor)?,
            CouponKind::AmountOff(amount) => amount.to_minor_units(),
        };

        Ok(discount.clamp(0, subtotal_minor))
    }

    /// Discount for a subtotal, never more than the subtotal itself.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::CurrencyMismatch`] if the coupon's amounts are not in the
    /// subtotal's currency, or [`DiscountError::PercentConversion`] if a percentage discount
    /// cannot be represented in minor units.
    pub fn discount_on(
        &self,
        subtotal: &Money<'static, Currency>,
    ) -> Result<Money<'static, Currency>, DiscountError> {
        if let Some(found) = self.currencies().find(|found| *found != subtotal.currency()) {
            return Err(DiscountError::CurrencyMismatch {
                coupon_currency: found.iso_alpha_code,
                subtotal_currency: subtotal.currency().iso_alpha_code,
            });
        }

        Ok(Money::from_minor(
            self.discount_minor(subtotal.to_minor_units())?,
            subtotal.currency(),
        ))
    }
}

/// Calculate a percentage of a minor unit amount, rounding half away from zero.
fn percent_of_minor(percent: Percentage, minor: i64) -> Result<i64, DiscountError> {
    (percent * Decimal::ONE)
        .checked_mul(Decimal::from(minor))
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}
