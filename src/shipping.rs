//! Shipping

use rusty_money::{
    Money,
    iso::{Currency, INR},
};
use thiserror::Error;

/// Default free-shipping threshold: 10,000.00 INR.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD_MINOR: i64 = 1_000_000;

/// Default flat shipping fee: 99.00 INR.
pub const DEFAULT_SHIPPING_FEE_MINOR: i64 = 9_900;

/// Errors building a shipping policy.
#[derive(Debug, Error, PartialEq)]
pub enum ShippingPolicyError {
    /// Threshold and fee are in different currencies (threshold currency, fee currency).
    #[error("Threshold has currency {0}, but fee has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),
}

/// Flat-fee shipping that becomes free once the subtotal reaches a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShippingPolicy {
    threshold: Money<'static, Currency>,
    flat_fee: Money<'static, Currency>,
}

impl ShippingPolicy {
    /// Create a shipping policy.
    ///
    /// # Errors
    ///
    /// Returns [`ShippingPolicyError::CurrencyMismatch`] if threshold and fee currencies differ.
    pub fn new(
        threshold: Money<'static, Currency>,
        flat_fee: Money<'static, Currency>,
    ) -> Result<Self, ShippingPolicyError> {
        if threshold.currency() != flat_fee.currency() {
            return Err(ShippingPolicyError::CurrencyMismatch(
                threshold.currency().iso_alpha_code,
                flat_fee.currency().iso_alpha_code,
            ));
        }

        Ok(Self {
            threshold,
            flat_fee,
        })
    }

    /// Subtotal at or above which shipping is free.
    pub fn threshold(&self) -> &Money<'static, Currency> {
        &self.threshold
    }

    /// Fee charged below the threshold.
    pub fn flat_fee(&self) -> &Money<'static, Currency> {
        &self.flat_fee
    }

    /// Policy currency.
    pub fn currency(&self) -> &'static Currency {
        self.flat_fee.currency()
    }

    /// Shipping cost, in minor units, for a subtotal in minor units.
    pub fn shipping_cost_minor(&self, subtotal_minor: i64) -> i64 {
        if subtotal_minor >= self.threshold.to_minor_units() {
            0
        } else {
            self.flat_fee.to_minor_units()
        }
    }

    /// Shipping cost for a subtotal: zero at or above the threshold, the flat fee otherwise.
    pub fn shipping_cost(&self, subtotal: &Money<'_, Currency>) -> Money<'static, Currency> {
        Money::from_minor(
            self.shipping_cost_minor(subtotal.to_minor_units()),
            self.currency(),
        )
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            threshold: Money::from_minor(DEFAULT_FREE_SHIPPING_THRESHOLD_MINOR, INR),
            flat_fee: Money::from_minor(DEFAULT_SHIPPING_FEE_MINOR, INR),
        }
    }
}
