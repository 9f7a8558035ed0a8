//! Sherpa User Guide
//!
//! This crate provides the data side of an in-app user guide:
//! - Parsing a JSON guide document into sections and articles
//! - Feedback contact points (email, Twitter) declared by the document
//! - A query engine that filters by search text, predicate and build number
//! - Match ranges for highlighting search results
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use sherpa_guide::{DataSource, Document, IndexPath};
//!
//! let document = Document::from_json(r#"{
//!     "feedback_twitter": "@jellybeansoup",
//!     "entries": [
//!         {"title": "Basics", "articles": [
//!             {"key": "welcome", "title": "Welcome", "body": "Getting started"},
//!             {"title": "Sync", "body": "Sync needs build 200", "build_min": 200}
//!         ]}
//!     ]
//! }"#);
//!
//! let mut data_source = DataSource::new(Arc::new(document));
//! data_source.set_build_number(Some(150));
//!
//! assert_eq!(data_source.number_of_rows(0), 1);
//! assert_eq!(data_source.article(IndexPath::new(0, 0)).unwrap().title, "Welcome");
//! assert!(data_source.has_feedback_section());
//! ```

pub mod article;
pub mod data_source;
pub mod document;
pub mod error;
pub mod feedback;
pub mod highlight;
pub mod section;

pub use article::{Article, DEFAULT_BUILD_MAX, DEFAULT_BUILD_MIN};
pub use data_source::{
    ArticleFilter, DataSource, IndexPath, Selection, DEFAULT_FEEDBACK_TITLE, DEFAULT_RELATED_TITLE,
};
pub use document::Document;
pub use error::{GuideError, Result};
pub use feedback::{AppInfo, Feedback, FeedbackAction, FeedbackEmail, FeedbackTwitter};
pub use highlight::TextSegment;
pub use section::Section;
