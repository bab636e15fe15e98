use std::net::SocketAddr;
use std::path::PathBuf;

use symcheck_catalog::{CatalogConfig, ConditionCatalog};

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Service settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub addr: SocketAddr,
    /// JSON catalog to serve instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl ApiConfig {
    /// Read `SYMCHECK_ADDR` and `SYMCHECK_CATALOG` from the environment.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let raw_addr = lookup("SYMCHECK_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid SYMCHECK_ADDR '{raw_addr}': {e}"))?;

        let catalog_path = lookup("SYMCHECK_CATALOG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, catalog_path })
    }

    /// Load the configured catalog. An empty catalog is fatal.
    pub fn load_catalog(&self) -> eyre::Result<ConditionCatalog> {
        let catalog = match &self.catalog_path {
            Some(path) => CatalogConfig::from_path(path)?.into_catalog()?,
            None => ConditionCatalog::builtin().clone(),
        };
        catalog.ensure_non_empty()?;

        tracing::info!(
            conditions = catalog.len(),
            symptoms = catalog.all_symptoms().len(),
            source = %self
                .catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "builtin".to_string()),
            "catalog ready"
        );
        Ok(catalog)
    }
}
