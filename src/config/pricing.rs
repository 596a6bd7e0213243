//! Pricing Config

use clap::Args;
use rusty_money::iso::Currency;

use crate::{
    config::ConfigError,
    money::{currency, parse_amount},
    shipping::ShippingPolicy,
};

/// Currency and shipping settings.
#[derive(Debug, Args)]
pub struct PricingConfig {
    /// ISO 4217 cart currency
    #[arg(long = "currency", env = "SPANNER_CURRENCY", default_value = "INR")]
    pub currency_code: String,

    /// Subtotal, in major units, from which shipping is free
    #[arg(long, env = "SPANNER_FREE_SHIPPING_THRESHOLD", default_value = "10000.00")]
    pub free_shipping_threshold: String,

    /// Flat shipping fee, in major units, below the threshold
    #[arg(long, env = "SPANNER_SHIPPING_FEE", default_value = "99.00")]
    pub shipping_fee: String,
}

impl PricingConfig {
    /// Cart currency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Money`] if the code is not a known currency.
    pub fn currency(&self) -> Result<&'static Currency, ConfigError> {
        Ok(currency(&self.currency_code.to_uppercase())?)
    }

    /// Shipping policy in the cart currency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Money`] if the currency or either amount is invalid.
    pub fn shipping_policy(&self) -> Result<ShippingPolicy, ConfigError> {
        let currency = self.currency()?;

        Ok(ShippingPolicy::new(
            parse_amount(&self.free_shipping_threshold, currency)?,
            parse_amount(&self.shipping_fee, currency)?,
        )?)
    }
}
