//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Catalog and coupon fixture settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Directory containing `products/` and `coupons/` fixtures
    #[arg(long, env = "SPANNER_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Product catalog fixture name
    #[arg(long, env = "SPANNER_CATALOG", default_value = "parts")]
    pub products: String,

    /// Coupon fixture name
    #[arg(long, env = "SPANNER_COUPONS", default_value = "parts")]
    pub coupons: String,

    /// Vehicle catalog YAML replacing the built-in table
    #[arg(long, env = "SPANNER_VEHICLES")]
    pub vehicles: Option<PathBuf>,
}
