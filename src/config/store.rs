//! Store Config

use std::path::PathBuf;

use clap::Args;

use crate::{cart::store::DEFAULT_CART_KEY, storage::FileStore};

/// Cart storage settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Directory holding persisted state
    #[arg(long, env = "SPANNER_DATA_DIR", default_value = ".spanner")]
    pub data_dir: PathBuf,

    /// Key the cart is stored under
    #[arg(long, env = "SPANNER_CART_KEY", default_value = DEFAULT_CART_KEY)]
    pub cart_key: String,
}

impl StoreConfig {
    /// File store rooted at the data directory.
    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }
}
