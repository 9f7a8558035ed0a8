//! Configuration manager implementation

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use sherpa_guide::Document;
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{ConfigManager as ConfigManagerTrait, GuideConfig, Rgb},
};

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "SHERPA".to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "SHERPA".to_string(),
        }
    }

    /// Use a different environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load, validate and open the configured document in one step
    pub fn load_document(&mut self) -> Result<(GuideConfig, Document)> {
        let config = self.load_config()?;
        self.validate_config(&config)?;
        let document = config.open_document()?;
        Ok((config, document))
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sherpa")
            .join("config.toml")
    }
}

impl ConfigManagerTrait for ConfigManager {
    fn load_config(&mut self) -> Result<GuideConfig> {
        let builder = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let mut guide_config: GuideConfig = config.try_deserialize()?;

        // Relative document paths are relative to the config file
        if let (Some(document), Some(parent)) = (
            guide_config.guide.document.as_ref(),
            self.config_path.parent(),
        ) {
            if document.is_relative() {
                guide_config.guide.document = Some(parent.join(document));
            }
        }

        debug!(path = %self.config_path.display(), "Loaded guide configuration");
        Ok(guide_config)
    }

    fn save_config(&self, config: &GuideConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &GuideConfig) -> Result<()> {
        if let Some(build) = config.guide.build_number {
            if build < 0 {
                return Err(ConfigError::Validation(format!(
                    "Build number must not be negative: {}",
                    build
                )));
            }
        }

        let appearance = &config.appearance;
        let colors = [
            ("tint_color", appearance.tint_color.as_deref()),
            (
                "article_background_color",
                Some(appearance.article_background_color.as_str()),
            ),
            (
                "article_text_color",
                Some(appearance.article_text_color.as_str()),
            ),
        ];
        for (field, value) in colors {
            if let Some(value) = value {
                if Rgb::parse(value).is_none() {
                    return Err(ConfigError::Validation(format!(
                        "Invalid hex color for {}: {}",
                        field, value
                    )));
                }
            }
        }

        if config.labels.feedback_section_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Feedback section title must not be empty".to_string(),
            ));
        }
        if config.labels.related_section_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Related section title must not be empty".to_string(),
            ));
        }

        config.logging.level()?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
