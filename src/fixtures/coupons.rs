//! Coupon Fixtures

use decimal_percentage::Percentage;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    discounts::{Coupon, CouponKind},
    fixtures::FixtureError,
    money::parse_price,
};

/// Wrapper for coupons in YAML
#[derive(Debug, Deserialize)]
pub struct CouponsFixture {
    /// Map of coupon code -> coupon fixture
    pub coupons: FxHashMap<String, CouponFixture>,
}

/// Coupon fixture from YAML
#[derive(Debug, Deserialize)]
pub struct CouponFixture {
    /// Discount configuration
    pub discount: CouponDiscountFixture,

    /// Minimum subtotal string (e.g., "1000.00 INR")
    #[serde(default)]
    pub minimum_subtotal: Option<String>,
}

/// Coupon discount configuration from YAML fixtures
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CouponDiscountFixture {
    /// Percentage off the subtotal (value between 0.0 and 1.0)
    PercentageOff {
        /// Discount percentage as decimal (e.g., 0.10 for 10%)
        value: f64,
    },

    /// Fixed amount off the subtotal (e.g., "200.00 INR")
    AmountOff {
        /// Discount amount string
        value: String,
    },
}

impl TryFrom<CouponDiscountFixture> for CouponKind {
    type Error = FixtureError;

    fn try_from(config: CouponDiscountFixture) -> Result<Self, Self::Error> {
        match config {
            CouponDiscountFixture::PercentageOff { value } => {
                if !(0.0..=1.0).contains(&value) {
                    return Err(FixtureError::InvalidPercentage(value));
                }

                Ok(CouponKind::PercentageOff(Percentage::from(value)))
            }
            CouponDiscountFixture::AmountOff { value } => {
                Ok(CouponKind::AmountOff(parse_price(&value)?))
            }
        }
    }
}

impl CouponFixture {
    /// Convert to a [`Coupon`] with the given code.
    ///
    /// # Errors
    ///
    /// Returns an error if the discount or minimum subtotal is invalid.
    pub fn into_coupon(self, code: String) -> Result<Coupon, FixtureError> {
        let coupon = Coupon::new(code, CouponKind::try_from(self.discount)?);

        Ok(match self.minimum_subtotal {
            Some(minimum) => coupon.with_minimum_subtotal(parse_price(&minimum)?),
            None => coupon,
        })
    }
}
