//! Infrastructure layer for Docent: configuration on disk, platform paths
//! and logging setup.

pub mod config_service;
pub mod logging;
pub mod paths;

pub use config_service::ConfigService;
pub use logging::init_tracing;
pub use paths::{DocentPaths, PathError};

use anyhow::Context;
use docent_core::config::ClientConfig;

/// Loads the configuration and installs logging for a client process.
pub fn bootstrap(config_service: &ConfigService) -> anyhow::Result<ClientConfig> {
    let config = config_service
        .load()
        .context("Failed to load docent configuration")?;
    init_tracing(&config.logging).context("Failed to initialise logging")?;
    tracing::info!("docent client configured");
    Ok(config)
}
