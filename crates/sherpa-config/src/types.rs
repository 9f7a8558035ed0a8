//! Configuration types for hosting the guide

use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use sherpa_guide::{
    Article, DataSource, Document, DEFAULT_FEEDBACK_TITLE, DEFAULT_RELATED_TITLE,
};

use crate::error::{ConfigError, Result};

/// Main guide configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GuideConfig {
    /// Document source and build gating
    pub guide: GuideSettings,
    /// Colors handed to the presentation layer
    pub appearance: AppearanceConfig,
    /// Titles of synthetic sections
    pub labels: LabelConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

/// Where the guide comes from and which build it is shown for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GuideSettings {
    /// Path of the JSON guide document
    pub document: Option<PathBuf>,
    /// Build number of the host application
    pub build_number: Option<i64>,
    /// Hide articles outside their build range
    pub gate_by_build: bool,
}

/// Presentation colors, as `#rrggbb` strings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Accent color; the host's default tint when unset
    pub tint_color: Option<String>,
    pub article_background_color: String,
    pub article_text_color: String,
}

/// Section titles shown by the data source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    pub feedback_section_title: String,
    pub related_section_title: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
}

/// An RGB color parsed from a hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`
    pub fn parse(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let rgb = u32::from_str_radix(digits, 16).ok()?;
        Some(Self(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        ))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Default for GuideSettings {
    fn default() -> Self {
        Self {
            document: None,
            build_number: None,
            gate_by_build: true,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            tint_color: None,
            article_background_color: "#ffffff".to_string(),
            article_text_color: "#1c1c1e".to_string(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            feedback_section_title: DEFAULT_FEEDBACK_TITLE.to_string(),
            related_section_title: DEFAULT_RELATED_TITLE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppearanceConfig {
    pub fn tint_rgb(&self) -> Option<Rgb> {
        self.tint_color.as_deref().and_then(Rgb::parse)
    }

    pub fn article_background_rgb(&self) -> Option<Rgb> {
        Rgb::parse(&self.article_background_color)
    }

    pub fn article_text_rgb(&self) -> Option<Rgb> {
        Rgb::parse(&self.article_text_color)
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level(&self) -> Result<tracing::Level> {
        self.level
            .parse()
            .map_err(|_| ConfigError::Validation(format!("Unknown log level: {}", self.level)))
    }
}

impl GuideConfig {
    /// Load the configured guide document
    pub fn open_document(&self) -> Result<Document> {
        let path = self.guide.document.as_ref().ok_or(ConfigError::NoDocument)?;
        Ok(Document::from_file(path))
    }

    /// Build the main list data source for a document
    pub fn data_source(&self, document: Arc<Document>) -> DataSource {
        let data_source =
            DataSource::new(document).with_feedback_title(&self.labels.feedback_section_title);

        match self.guide.build_number {
            Some(build) if self.guide.gate_by_build => data_source.with_build_number(build),
            _ => data_source,
        }
    }

    /// Build the related articles list shown under `article`
    pub fn related_data_source(&self, document: Arc<Document>, article: &Article) -> DataSource {
        let data_source =
            DataSource::related(document, article, &self.labels.related_section_title);

        match self.guide.build_number {
            Some(build) if self.guide.gate_by_build => data_source.with_build_number(build),
            _ => data_source,
        }
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration
    fn load_config(&mut self) -> Result<GuideConfig>;
    /// Save configuration
    fn save_config(&self, config: &GuideConfig) -> Result<()>;
    /// Validate configuration
    fn validate_config(&self, config: &GuideConfig) -> Result<()>;
}
