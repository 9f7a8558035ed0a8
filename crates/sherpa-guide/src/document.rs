//! Guide documents and their JSON source format
//!
//! A document is either an object:
//!
//! ```json
//! {
//!   "feedback_email": "Name <addr@example.com>",
//!   "feedback_twitter": "@handle",
//!   "entries": [ { "title": "...", "detail": "...", "articles": [ ... ] } ]
//! }
//! ```
//!
//! or a bare array equivalent to `entries`. Parsing is best effort: anything
//! malformed is skipped at the smallest scope and never reported as an error.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    article::Article,
    error::Result,
    feedback::{Feedback, FeedbackEmail, FeedbackTwitter},
    section::Section,
};

/// The parsed user guide
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Document {
    pub sections: Vec<Section>,
    pub feedback: Vec<Feedback>,
}

impl Document {
    /// Create a document from already parsed parts
    pub fn new(sections: Vec<Section>, feedback: Vec<Feedback>) -> Self {
        Self { sections, feedback }
    }

    /// Parse a document from a raw JSON value
    pub fn from_value(value: &Value) -> Self {
        let document = match value {
            Value::Object(map) => Self::from_map(map),
            Value::Array(entries) => Self::new(parse_sections(entries), Vec::new()),
            _ => Self::default(),
        };

        debug!(
            sections = document.sections.len(),
            feedback = document.feedback.len(),
            "Parsed guide document"
        );

        document
    }

    /// Parse a document from JSON bytes, yielding an empty document on bad JSON
    pub fn from_slice(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                warn!("Guide document is not valid JSON: {}", e);
                Self::default()
            }
        }
    }

    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> Self {
        Self::from_slice(json.as_bytes())
    }

    /// Load a document from a file.
    ///
    /// A missing or unreadable file yields an empty document.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_json(path) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                warn!("Failed to load guide document {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let mut feedback = Vec::new();

        if let Some(email) = map
            .get("feedback_email")
            .and_then(Value::as_str)
            .and_then(FeedbackEmail::parse)
        {
            feedback.push(Feedback::Email(email));
        }

        if let Some(twitter) = map
            .get("feedback_twitter")
            .and_then(Value::as_str)
            .and_then(FeedbackTwitter::parse)
        {
            feedback.push(Feedback::Twitter(twitter));
        }

        let sections = map
            .get("entries")
            .and_then(Value::as_array)
            .map(|entries| parse_sections(entries))
            .unwrap_or_default();

        Self::new(sections, feedback)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get a section by index, if in range
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// All articles in section-then-row order
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.sections.iter().flat_map(|section| section.articles.iter())
    }

    /// Find the first article with the given key
    pub fn article(&self, key: &str) -> Option<&Article> {
        self.articles()
            .find(|article| article.key.as_deref() == Some(key))
    }

    /// Articles listed in `article`'s related keys, in document order
    pub fn related_articles(&self, article: &Article) -> Vec<&Article> {
        self.articles()
            .filter(|candidate| candidate.is_related_to(article))
            .collect()
    }

    pub fn email(&self) -> Option<&FeedbackEmail> {
        self.feedback.iter().find_map(|entry| match entry {
            Feedback::Email(email) => Some(email),
            _ => None,
        })
    }

    pub fn twitter(&self) -> Option<&FeedbackTwitter> {
        self.feedback.iter().find_map(|entry| match entry {
            Feedback::Twitter(twitter) => Some(twitter),
            _ => None,
        })
    }
}

/// Parse raw entries, dropping sections left without articles
fn parse_sections(entries: &[Value]) -> Vec<Section> {
    entries
        .iter()
        .filter_map(Section::from_value)
        .filter(|section| !section.is_empty())
        .collect()
}

fn read_json(path: &Path) -> Result<Value> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
