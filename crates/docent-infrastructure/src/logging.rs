//! Tracing subscriber setup.

use docent_core::DocentError;
use docent_core::config::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this again after a
/// subscriber is installed is a no-op.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), DocentError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level).map_err(|e| {
            DocentError::config(format!("invalid log level '{}': {}", settings.level, e))
        })?,
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        tracing::debug!("[logging] subscriber already installed");
    }
    Ok(())
}
