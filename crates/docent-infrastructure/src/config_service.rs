//! Configuration service implementation.
//!
//! Loads the client configuration from `config.toml` in the docent config
//! directory, writing a default file on first use.

use crate::paths::DocentPaths;
use docent_core::config::ClientConfig;
use docent_core::{DocentError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Loads and caches the client configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file location; `None` means the platform default.
    path: Option<PathBuf>,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform default location.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading a specific file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the configuration, loading it if not cached.
    ///
    /// A file that cannot be read or parsed yields the defaults; the failure
    /// is logged and the defaults are not cached, so a fixed file is picked
    /// up on the next call.
    pub fn get_config(&self) -> ClientConfig {
        if let Some(cached) = self.read_cache().as_ref() {
            return cached.clone();
        }

        match self.load() {
            Ok(loaded) => {
                *self.write_cache() = Some(loaded.clone());
                loaded
            }
            Err(e) => {
                tracing::warn!("[ConfigService] using defaults: {}", e);
                ClientConfig::default()
            }
        }
    }

    /// Reads the configuration file, creating it with defaults if missing.
    pub fn load(&self) -> Result<ClientConfig> {
        let path = self.config_path()?;

        if !path.exists() {
            tracing::info!("[ConfigService] creating default config at {}", path.display());
            let config = ClientConfig::default();
            Self::write_file(&path, &config)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        tracing::debug!("[ConfigService] loaded {}", path.display());
        Ok(config)
    }

    /// Writes `config` to disk and refreshes the cache.
    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        let path = self.config_path()?;
        Self::write_file(&path, config)?;
        *self.write_cache() = Some(config.clone());
        Ok(())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.write_cache() = None;
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => DocentPaths::config_file().map_err(|e| DocentError::config(e.to_string())),
        }
    }

    fn write_file(path: &Path, config: &ClientConfig) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, Option<ClientConfig>> {
        self.config.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Option<ClientConfig>> {
        self.config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
