//! Logging setup for hosts embedding the guide

use crate::{error::Result, types::LoggingConfig};

/// Install a `tracing` fmt subscriber at the configured level.
///
/// Returns `Ok(false)` when a global subscriber was already installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let level = config.level()?;

    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %level, "Guide logging initialized");
    }

    Ok(installed)
}
