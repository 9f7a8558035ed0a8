//! Filtered, table-shaped view over a guide document
//!
//! [`DataSource`] combines a search query, an arbitrary article filter, the
//! host build number and an optional group title into the list of sections a
//! presentation layer should show. Every setter recomputes the result before
//! returning.

use std::{fmt, sync::Arc};

use tracing::debug;

use crate::{article::Article, document::Document, feedback::Feedback, section::Section};

/// Header title of the trailing feedback section
pub const DEFAULT_FEEDBACK_TITLE: &str = "Feedback";

/// Group title used for the related articles list
pub const DEFAULT_RELATED_TITLE: &str = "Related";

/// Shared article predicate
pub type ArticleFilter = Arc<dyn Fn(&Article) -> bool + Send + Sync>;

/// Position of a row in the data source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// The item behind a selected row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Article(&'a Article),
    Feedback(&'a Feedback),
}

/// Query engine over a [`Document`]
#[derive(Clone)]
pub struct DataSource {
    document: Arc<Document>,
    query: Option<String>,
    filter: Option<ArticleFilter>,
    build_number: Option<i64>,
    section_title: Option<String>,
    feedback_title: String,
    filtered_sections: Vec<Section>,
}

impl DataSource {
    /// Create a data source showing the whole document
    pub fn new(document: Arc<Document>) -> Self {
        let mut data_source = Self {
            document,
            query: None,
            filter: None,
            build_number: None,
            section_title: None,
            feedback_title: DEFAULT_FEEDBACK_TITLE.to_string(),
            filtered_sections: Vec::new(),
        };
        data_source.apply_filter();
        data_source
    }

    /// Create a data source listing the articles related to `article`,
    /// flattened under `title`.
    pub fn related(document: Arc<Document>, article: &Article, title: impl Into<String>) -> Self {
        let related_keys = article.related_keys.clone();

        Self::new(document)
            .with_section_title(title)
            .with_filter(move |candidate| match &candidate.key {
                Some(key) => related_keys.contains(key),
                None => false,
            })
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(Some(query.into()));
        self
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Article) -> bool + Send + Sync + 'static,
    {
        self.set_filter(filter);
        self
    }

    pub fn with_build_number(mut self, build_number: i64) -> Self {
        self.set_build_number(Some(build_number));
        self
    }

    pub fn with_section_title(mut self, title: impl Into<String>) -> Self {
        self.set_section_title(Some(title.into()));
        self
    }

    /// Set the header title of the feedback section
    pub fn with_feedback_title(mut self, title: impl Into<String>) -> Self {
        self.feedback_title = title.into();
        self
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn build_number(&self) -> Option<i64> {
        self.build_number
    }

    pub fn section_title(&self) -> Option<&str> {
        self.section_title.as_deref()
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    pub fn set_query(&mut self, query: Option<String>) {
        self.query = query;
        self.apply_filter();
    }

    pub fn set_filter<F>(&mut self, filter: F)
    where
        F: Fn(&Article) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self.apply_filter();
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.apply_filter();
    }

    pub fn set_build_number(&mut self, build_number: Option<i64>) {
        self.build_number = build_number;
        self.apply_filter();
    }

    /// Set the group title; while set, results are flattened into one section
    pub fn set_section_title(&mut self, title: Option<String>) {
        self.section_title = title;
        self.apply_filter();
    }

    /// Recompute the visible sections from the document
    fn apply_filter(&mut self) {
        let mut sections = self.document.sections.clone();

        if let Some(query) = &self.query {
            sections = sections
                .iter()
                .filter_map(|section| section.filtered_by_query(query))
                .collect();
        }

        if let Some(filter) = &self.filter {
            sections = sections
                .iter()
                .filter_map(|section| section.filtered(|article| filter(article)))
                .collect();
        }

        if let Some(build_number) = self.build_number {
            sections = sections
                .iter()
                .filter_map(|section| section.filtered_by_build(build_number))
                .collect();
        }

        if let Some(title) = &self.section_title {
            let articles: Vec<Article> = sections
                .into_iter()
                .flat_map(|section| section.articles)
                .collect();

            sections = if articles.is_empty() {
                Vec::new()
            } else {
                vec![Section::new(Some(title.clone()), None, articles)]
            };
        }

        debug!(
            sections = sections.len(),
            query = ?self.query,
            build_number = ?self.build_number,
            "Applied guide filter"
        );

        self.filtered_sections = sections;
    }

    /// Sections left after filtering, without the feedback section
    pub fn filtered_sections(&self) -> &[Section] {
        &self.filtered_sections
    }

    /// Whether the feedback section follows the filtered sections
    pub fn has_feedback_section(&self) -> bool {
        self.section_title.is_none() && !self.document.feedback.is_empty()
    }

    /// Index of the feedback section, if shown
    pub fn feedback_section_index(&self) -> Option<usize> {
        self.has_feedback_section()
            .then_some(self.filtered_sections.len())
    }

    /// Total number of sections including the feedback section
    pub fn number_of_sections(&self) -> usize {
        self.filtered_sections.len() + usize::from(self.has_feedback_section())
    }

    /// Number of rows in a section; zero when out of range
    pub fn number_of_rows(&self, section: usize) -> usize {
        if let Some(section) = self.section(section) {
            return section.len();
        }

        if self.feedback_section_index() == Some(section) {
            return self.document.feedback.len();
        }

        0
    }

    pub fn title_for_header(&self, section: usize) -> Option<&str> {
        if let Some(section) = self.section(section) {
            return section.title.as_deref();
        }

        if self.feedback_section_index() == Some(section) {
            return Some(&self.feedback_title);
        }

        None
    }

    pub fn title_for_footer(&self, section: usize) -> Option<&str> {
        self.section(section)
            .and_then(|section| section.detail.as_deref())
    }

    /// Get a filtered section by index
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.filtered_sections.get(index)
    }

    /// Get the article at a row
    pub fn article(&self, index_path: IndexPath) -> Option<&Article> {
        self.section(index_path.section)?.article(index_path.row)
    }

    /// Get the feedback entry at a row of the feedback section
    pub fn feedback(&self, index_path: IndexPath) -> Option<&Feedback> {
        if self.feedback_section_index() != Some(index_path.section) {
            return None;
        }

        self.document.feedback.get(index_path.row)
    }

    /// Locate an article by key, title and body
    pub fn index_path(&self, article: &Article) -> Option<IndexPath> {
        self.filtered_sections
            .iter()
            .enumerate()
            .find_map(|(section_index, section)| {
                section
                    .articles
                    .iter()
                    .position(|candidate| candidate.same_identity(article))
                    .map(|row| IndexPath::new(section_index, row))
            })
    }

    /// Resolve a selected row to the item it shows
    pub fn select(&self, index_path: IndexPath) -> Option<Selection<'_>> {
        if let Some(article) = self.article(index_path) {
            return Some(Selection::Article(article));
        }

        self.feedback(index_path).map(Selection::Feedback)
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource")
            .field("query", &self.query)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .field("build_number", &self.build_number)
            .field("section_title", &self.section_title)
            .field("feedback_title", &self.feedback_title)
            .field("filtered_sections", &self.filtered_sections.len())
            .finish()
    }
}
