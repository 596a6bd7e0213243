//! Configuration
//!
//! Command-line and environment settings for the `spanner` binary. Every option can be given as
//! a flag or through the environment (a `.env` file in the working directory is honoured).

use clap::Args;
use thiserror::Error;

use crate::{
    config::{
        catalog::CatalogConfig, logging::LoggingConfig, pricing::PricingConfig, store::StoreConfig,
    },
    money::MoneyParseError,
    shipping::ShippingPolicyError,
};

pub mod catalog;
pub mod logging;
pub mod pricing;
pub mod store;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configured amount or currency is invalid
    #[error(transparent)]
    Money(#[from] MoneyParseError),

    /// Threshold and fee do not form a valid shipping policy
    #[error(transparent)]
    Shipping(#[from] ShippingPolicyError),
}

/// Spanner configuration
#[derive(Debug, Args)]
pub struct SpannerConfig {
    /// Cart storage settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Catalog and coupon fixture settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Currency and shipping settings.
    #[command(flatten)]
    pub pricing: PricingConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

/// Load `.env` from the working directory into the process environment, if present.
pub fn load_dotenv() {
    // Missing .env is fine
    _ = dotenvy::dotenv();
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rusty_money::{Money, iso::INR};
    use testresult::TestResult;

    use super::*;
    use crate::config::logging::LogFormat;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        config: SpannerConfig,
    }

    #[test]
    fn defaults_apply_without_arguments() -> TestResult {
        let cli = TestCli::try_parse_from(["spanner"])?;
        let config = cli.config;

        assert_eq!(config.catalog.products, "parts");
        assert_eq!(config.pricing.currency()?, INR);
        assert_eq!(
            config.pricing.shipping_policy()?.threshold(),
            &Money::from_minor(1_000_000, INR)
        );
        assert!(matches!(config.logging.log_format, LogFormat::Compact));

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let cli = TestCli::try_parse_from([
            "spanner",
            "--currency",
            "usd",
            "--free-shipping-threshold",
            "50.00",
            "--shipping-fee",
            "4.99",
            "--log-format",
            "json",
        ])?;

        let policy = cli.config.pricing.shipping_policy()?;

        assert_eq!(policy.currency().iso_alpha_code, "USD");
        assert_eq!(policy.flat_fee().to_minor_units(), 499);
        assert!(matches!(cli.config.logging.log_format, LogFormat::Json));

        Ok(())
    }

    #[test]
    fn invalid_amount_is_a_config_error() -> TestResult {
        let cli = TestCli::try_parse_from(["spanner", "--shipping-fee", "ninety-nine"])?;

        assert!(matches!(
            cli.config.pricing.shipping_policy(),
            Err(ConfigError::Money(MoneyParseError::InvalidAmount(_)))
        ));

        Ok(())
    }
}
