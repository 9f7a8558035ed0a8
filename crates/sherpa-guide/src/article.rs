//! Guide articles and their matching rules

use serde::Serialize;
use serde_json::{Map, Value};

/// Build number assumed when an article does not declare `build_min`
pub const DEFAULT_BUILD_MIN: i64 = 1;

/// Build number assumed when an article does not declare `build_max`
pub const DEFAULT_BUILD_MAX: i64 = i64::MAX;

/// A single entry in the user guide.
///
/// Articles are only ever built from a raw document map through
/// [`Article::from_value`], so a constructed article always has a non-empty
/// title and body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub title: String,
    pub body: String,
    pub build_min: i64,
    pub build_max: i64,
    #[serde(rename = "related_articles")]
    pub related_keys: Vec<String>,
}

impl Article {
    /// Parse an article from a raw JSON value.
    ///
    /// Returns `None` when the value is not an object or when either `title`
    /// or `body` is missing, empty or not a string. Every other field falls
    /// back to its default when malformed.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::from_map(value.as_object()?)
    }

    /// Parse an article from a raw JSON object.
    pub fn from_map(map: &Map<String, Value>) -> Option<Self> {
        let title = non_empty_string(map.get("title"))?;
        let body = non_empty_string(map.get("body"))?;

        Some(Self {
            key: non_empty_string(map.get("key")),
            title,
            body,
            build_min: build_number(map.get("build_min")).unwrap_or(DEFAULT_BUILD_MIN),
            build_max: build_number(map.get("build_max")).unwrap_or(DEFAULT_BUILD_MAX),
            related_keys: related_keys(map.get("related_articles")),
        })
    }

    /// Check if the title or body contains the query, ignoring case.
    ///
    /// An empty query matches every article.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }

        let query_lower = query.to_lowercase();

        self.title.to_lowercase().contains(&query_lower)
            || self.body.to_lowercase().contains(&query_lower)
    }

    /// Check if the article should be visible for the given build number
    pub fn matches_build(&self, build: i64) -> bool {
        self.build_min <= build && build <= self.build_max
    }

    /// Check if `other` lists this article among its related articles.
    ///
    /// Only keyed articles can be related; a keyless article never matches.
    pub fn is_related_to(&self, other: &Article) -> bool {
        match &self.key {
            Some(key) => other.related_keys.iter().any(|related| related == key),
            None => false,
        }
    }

    /// Structural identity used when locating an article in derived sections
    pub fn same_identity(&self, other: &Article) -> bool {
        self.key == other.key && self.title == other.title && self.body == other.body
    }
}

/// Read a string field, treating empty strings and other types as missing
pub(crate) fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Accept either an integer or a string holding an integer
fn build_number(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Accept a list of keys or a single key
fn related_keys(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(key)) if !key.is_empty() => vec![key.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "key": "example-key",
            "title": "Test Article",
            "body": "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
            "build_min": 365,
            "build_max": 867,
            "related_articles": ["missing-article"]
        })
    }

    fn with_field(field: &str, value: Value) -> Value {
        let mut raw = sample();
        raw[field] = value;
        raw
    }

    fn without_field(field: &str) -> Value {
        let mut raw = sample();
        raw.as_object_mut().unwrap().remove(field);
        raw
    }

    #[test]
    fn test_parse_full_article() {
        let article = Article::from_value(&sample()).unwrap();
        assert_eq!(article.key.as_deref(), Some("example-key"));
        assert_eq!(article.title, "Test Article");
        assert_eq!(article.build_min, 365);
        assert_eq!(article.build_max, 867);
        assert_eq!(article.related_keys, vec!["missing-article".to_string()]);
    }

    #[test]
    fn test_parse_minimal_article() {
        let article = Article::from_value(&json!({"title": "T", "body": "B"})).unwrap();
        assert_eq!(article.key, None);
        assert_eq!(article.build_min, DEFAULT_BUILD_MIN);
        assert_eq!(article.build_max, DEFAULT_BUILD_MAX);
        assert!(article.related_keys.is_empty());
    }

    #[test]
    fn test_key_normalization() {
        let empty = Article::from_value(&with_field("key", json!(""))).unwrap();
        assert_eq!(empty.key, None);

        let invalid = Article::from_value(&with_field("key", json!([23]))).unwrap();
        assert_eq!(invalid.key, None);

        let missing = Article::from_value(&without_field("key")).unwrap();
        assert_eq!(missing.key, None);
    }

    #[test]
    fn test_title_and_body_required() {
        for field in ["title", "body"] {
            assert!(Article::from_value(&with_field(field, json!(""))).is_none());
            assert!(Article::from_value(&with_field(field, json!([23]))).is_none());
            assert!(Article::from_value(&without_field(field)).is_none());
        }
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(Article::from_value(&json!("Test Article")).is_none());
        assert!(Article::from_value(&json!([sample()])).is_none());
    }

    #[test]
    fn test_build_min_coercion() {
        let int = Article::from_value(&with_field("build_min", json!(42))).unwrap();
        assert_eq!(int.build_min, 42);

        let string = Article::from_value(&with_field("build_min", json!("88"))).unwrap();
        assert_eq!(string.build_min, 88);

        for invalid in [
            json!(""),
            json!("invalid build number"),
            json!(" 88"),
            json!("88 "),
            json!([23]),
            json!(4.5),
        ] {
            let article = Article::from_value(&with_field("build_min", invalid)).unwrap();
            assert_eq!(article.build_min, DEFAULT_BUILD_MIN);
        }

        let missing = Article::from_value(&without_field("build_min")).unwrap();
        assert_eq!(missing.build_min, DEFAULT_BUILD_MIN);
    }

    #[test]
    fn test_build_max_coercion() {
        let int = Article::from_value(&with_field("build_max", json!(42))).unwrap();
        assert_eq!(int.build_max, 42);

        let string = Article::from_value(&with_field("build_max", json!("88"))).unwrap();
        assert_eq!(string.build_max, 88);

        for invalid in [json!(""), json!("invalid build number"), json!(" 88"), json!({"a": 1})] {
            let article = Article::from_value(&with_field("build_max", invalid)).unwrap();
            assert_eq!(article.build_max, DEFAULT_BUILD_MAX);
        }
    }

    #[test]
    fn test_related_keys_shapes() {
        let single = Article::from_value(&with_field("related_articles", json!("other"))).unwrap();
        assert_eq!(single.related_keys, vec!["other".to_string()]);

        let empty = Article::from_value(&with_field("related_articles", json!(""))).unwrap();
        assert!(empty.related_keys.is_empty());

        let mixed = Article::from_value(&with_field("related_articles", json!(["a", 23]))).unwrap();
        assert!(mixed.related_keys.is_empty());

        let number = Article::from_value(&with_field("related_articles", json!(23))).unwrap();
        assert!(number.related_keys.is_empty());
    }

    #[test]
    fn test_matches_query() {
        let article = Article::from_value(&sample()).unwrap();
        assert!(article.matches_query(""));
        assert!(article.matches_query("test"));
        assert!(article.matches_query("IPSUM"));
        assert!(article.matches_query("Sit Amet"));
        assert!(!article.matches_query("bibendum"));
    }

    #[test]
    fn test_matches_build() {
        let article = Article::from_value(&sample()).unwrap();
        assert!(article.matches_build(500));
        assert!(article.matches_build(365));
        assert!(article.matches_build(867));
        assert!(!article.matches_build(200));
        assert!(!article.matches_build(900));
    }

    #[test]
    fn test_related_lookup_requires_key() {
        let parent = Article::from_value(&json!({
            "title": "Parent", "body": "B", "related_articles": ["child"]
        }))
        .unwrap();
        let child = Article::from_value(&json!({"key": "child", "title": "C", "body": "B"})).unwrap();
        let keyless = Article::from_value(&json!({"title": "C", "body": "B"})).unwrap();

        assert!(child.is_related_to(&parent));
        assert!(!keyless.is_related_to(&parent));
        assert!(!parent.is_related_to(&child));
    }

    #[test]
    fn test_serializes_wire_names() {
        let article = Article::from_value(&sample()).unwrap();
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["related_articles"], json!(["missing-article"]));
        assert_eq!(value["build_min"], json!(365));
    }
}
