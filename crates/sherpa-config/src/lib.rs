//! Sherpa Configuration
//!
//! This crate provides host-side configuration for the Sherpa user guide,
//! including the document location, the host build number, presentation
//! colors, section labels and logging. Configuration is read from a TOML file
//! with `SHERPA__` environment overrides.

pub mod error;
pub mod logging;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{
    AppearanceConfig, ConfigManager as ConfigManagerTrait, GuideConfig, GuideSettings,
    LabelConfig, LoggingConfig, Rgb,
};
