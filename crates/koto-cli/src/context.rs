//! Application context: loaded configuration plus the persisted catalog.

use std::path::PathBuf;

use anyhow::Context as _;

use koto_config::KotoConfig;
use koto_store::Catalog;

use crate::cli::GlobalFlags;

/// Everything command handlers need: config, the catalog document, and the
/// path it round-trips through.
pub struct AppContext {
    pub config: KotoConfig,
    pub catalog: Catalog,
    catalog_path: PathBuf,
}

impl AppContext {
    /// Load configuration and the catalog file. A missing catalog file yields
    /// a fresh default catalog; it is written on the first mutating command.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = KotoConfig::load_with_dotenv().context("failed to load configuration")?;

        let catalog_path = PathBuf::from(
            flags
                .catalog
                .clone()
                .unwrap_or_else(|| config.general.catalog_path.clone()),
        );
        let catalog = Catalog::load(&catalog_path)
            .with_context(|| format!("failed to load catalog from {}", catalog_path.display()))?;

        tracing::debug!(path = %catalog_path.display(), jobs = catalog.jobs.len(), "context ready");
        Ok(Self {
            config,
            catalog,
            catalog_path,
        })
    }

    /// Persist the catalog back to its file.
    pub fn save(&self) -> anyhow::Result<()> {
        self.catalog
            .save(&self.catalog_path)
            .with_context(|| format!("failed to save catalog to {}", self.catalog_path.display()))
    }
}
