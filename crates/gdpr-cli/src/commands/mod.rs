pub mod config;
pub mod obfuscate;

use anyhow::Result;
use gdpr_config::{StoreBackend, StoreConfig};
use gdpr_store::{HttpStore, LocalStore, ObjectStore};
use std::time::Duration;

/// Build the object store described by the config
pub fn open_store(config: &StoreConfig) -> Result<Box<dyn ObjectStore>> {
    let store: Box<dyn ObjectStore> = match config.backend {
        StoreBackend::Local => {
            tracing::debug!(root = %config.root.display(), "using local store");
            Box::new(LocalStore::new(&config.root))
        }
        StoreBackend::Http => {
            tracing::debug!(endpoint = %config.endpoint, "using http store");
            Box::new(HttpStore::new(
                &config.endpoint,
                Duration::from_secs(config.timeout_secs),
            )?)
        }
    };
    Ok(store)
}
