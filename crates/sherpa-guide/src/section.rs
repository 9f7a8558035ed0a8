//! Sections group articles under an optional header and footer

use serde::Serialize;
use serde_json::Value;

use crate::article::{non_empty_string, Article};

/// An ordered, optionally titled group of articles
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub articles: Vec<Article>,
}

impl Section {
    /// Create a section from already parsed articles
    pub fn new(title: Option<String>, detail: Option<String>, articles: Vec<Article>) -> Self {
        Self {
            title,
            detail,
            articles,
        }
    }

    /// Parse a section from a raw JSON value.
    ///
    /// Articles that fail to parse are dropped. The resulting section may be
    /// empty; the document decides whether to keep it.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;

        let articles = map
            .get("articles")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Article::from_value).collect())
            .unwrap_or_default();

        Some(Self::new(
            non_empty_string(map.get("title")),
            non_empty_string(map.get("detail")),
            articles,
        ))
    }

    /// Derive a section containing only the articles accepted by `filter`.
    ///
    /// Returns `None` instead of an empty section so callers can drop it.
    pub fn filtered<F>(&self, filter: F) -> Option<Section>
    where
        F: Fn(&Article) -> bool,
    {
        let articles: Vec<Article> = self
            .articles
            .iter()
            .filter(|article| filter(article))
            .cloned()
            .collect();

        if articles.is_empty() {
            return None;
        }

        Some(Section::new(self.title.clone(), self.detail.clone(), articles))
    }

    /// Derive a section with the articles matching a search query
    pub fn filtered_by_query(&self, query: &str) -> Option<Section> {
        self.filtered(|article| article.matches_query(query))
    }

    /// Derive a section with the articles visible in the given build
    pub fn filtered_by_build(&self, build: i64) -> Option<Section> {
        self.filtered(|article| article.matches_build(build))
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Get an article by row, if in range
    pub fn article(&self, row: usize) -> Option<&Article> {
        self.articles.get(row)
    }
}
