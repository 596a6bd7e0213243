use std::io;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use spanner::{config::SpannerConfig, fixtures::Fixture, vehicles::VehicleCatalog};

mod cart;
mod parts;
mod vehicles;

#[derive(Debug, Parser)]
#[command(name = "spanner", about = "Spanner storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: SpannerConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect and change the persisted cart
    Cart(cart::CartCommand),

    /// Browse the vehicle catalog
    Vehicles(vehicles::VehiclesCommand),

    /// List catalog parts that fit a vehicle
    Parts(parts::PartsArgs),
}

impl Cli {
    pub(crate) fn run(self, out: &mut impl io::Write) -> anyhow::Result<()> {
        match self.command {
            Commands::Cart(command) => cart::run(command, &self.config, out),
            Commands::Vehicles(command) => vehicles::run(command, &self.config, out),
            Commands::Parts(args) => parts::run(args, &self.config, out),
        }
    }
}

/// Product catalog from the configured fixture, checked against the cart currency.
fn load_products(config: &SpannerConfig) -> anyhow::Result<Fixture> {
    let mut fixture = Fixture::with_base_path(&config.catalog.fixtures_dir);

    fixture
        .load_products(&config.catalog.products)
        .with_context(|| format!("failed to load product catalog {:?}", config.catalog.products))?;

    let cart_currency = config.pricing.currency()?;
    let catalog_currency = fixture.currency()?;

    if catalog_currency != cart_currency {
        bail!(
            "catalog is priced in {}, but the cart currency is {}",
            catalog_currency.iso_alpha_code,
            cart_currency.iso_alpha_code
        );
    }

    Ok(fixture)
}

/// Coupons from the configured fixture, in the same currency as the catalog.
fn load_coupons(config: &SpannerConfig) -> anyhow::Result<Fixture> {
    let mut fixture = load_products(config)?;

    fixture
        .load_coupons(&config.catalog.coupons)
        .with_context(|| format!("failed to load coupons {:?}", config.catalog.coupons))?;

    Ok(fixture)
}

fn load_vehicles(config: &SpannerConfig) -> anyhow::Result<VehicleCatalog> {
    let Some(path) = &config.catalog.vehicles else {
        return Ok(VehicleCatalog::builtin());
    };

    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read vehicle catalog {}", path.display()))?;

    VehicleCatalog::from_yaml(&yaml)
        .with_context(|| format!("invalid vehicle catalog {}", path.display()))
}
