//! Integration tests for sherpa-guide

use std::{path::PathBuf, sync::Arc};

use sherpa_guide::{DataSource, Document, Feedback, IndexPath, Selection};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn row_counts(data_source: &DataSource) -> Vec<usize> {
    (0..data_source.number_of_sections())
        .map(|section| data_source.number_of_rows(section))
        .collect()
}

#[test]
fn test_sections_from_files() {
    for name in ["dictionary.json", "array.json"] {
        let document = Document::from_file(fixture(name));
        assert_eq!(document.section_count(), 2, "{}", name);
        assert_eq!(document.sections[0].title.as_deref(), Some("Getting Started"));
        assert_eq!(document.sections[1].title.as_deref(), Some("Advanced"));
        assert_eq!(document.sections[0].articles.len(), 2);
    }

    for name in ["invalid.json", "missing.json"] {
        let document = Document::from_file(fixture(name));
        assert!(document.is_empty(), "{}", name);
        assert!(document.feedback.is_empty(), "{}", name);
    }
}

#[test]
fn test_feedback_from_file() {
    let document = Document::from_file(fixture("dictionary.json"));
    assert_eq!(document.feedback.len(), 2);
    assert_eq!(document.email().unwrap().name.as_deref(), Some("JellyStyle Support"));
    assert_eq!(document.twitter().unwrap().handle, "jellybeansoup");

    let array = Document::from_file(fixture("array.json"));
    assert!(array.feedback.is_empty());
}

#[test]
fn test_document_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.json");
    std::fs::write(
        &path,
        r#"[{"title": "Only", "articles": [{"title": "T", "body": "B"}]}]"#,
    )
    .unwrap();

    let document = Document::from_file(&path);
    assert_eq!(document.section_count(), 1);
    assert_eq!(document.sections[0].articles[0].title, "T");
}

#[test]
fn test_data_source_over_fixture() {
    let document = Arc::new(Document::from_file(fixture("dictionary.json")));
    let mut data_source = DataSource::new(document.clone());

    assert_eq!(data_source.number_of_sections(), document.section_count() + 1);
    assert_eq!(row_counts(&data_source), vec![2, 2, 2]);

    data_source.set_query(Some("biBE".to_string()));
    assert_eq!(row_counts(&data_source), vec![1, 1, 2]);

    data_source.set_query(None);
    data_source.set_build_number(Some(370));
    assert_eq!(row_counts(&data_source), vec![1, 1, 2]);

    data_source.set_build_number(None);
    data_source.set_filter(|article| article.build_min >= 400);
    assert_eq!(row_counts(&data_source), vec![1, 2]);

    data_source.set_section_title(Some("Example Section Title".to_string()));
    assert_eq!(row_counts(&data_source), vec![1]);
    assert_eq!(data_source.number_of_rows(10), 0);
}

#[test]
fn test_selecting_rows() {
    let document = Arc::new(Document::from_file(fixture("dictionary.json")));
    let data_source = DataSource::new(document);

    match data_source.select(IndexPath::new(0, 1)) {
        Some(Selection::Article(article)) => {
            assert_eq!(article.key.as_deref(), Some("article-key"));
        }
        other => panic!("Expected article, got {:?}", other),
    }

    match data_source.select(IndexPath::new(2, 0)) {
        Some(Selection::Feedback(Feedback::Email(email))) => {
            assert_eq!(email.address, "support@jellystyle.com");
        }
        other => panic!("Expected email feedback, got {:?}", other),
    }
}

#[test]
fn test_related_articles_flow() {
    let document = Arc::new(Document::from_file(fixture("dictionary.json")));
    let article = document.article("article-key").unwrap().clone();

    let related = DataSource::related(document.clone(), &article, "Related");
    assert_eq!(row_counts(&related), vec![1]);
    assert_eq!(
        related.article(IndexPath::new(0, 0)).unwrap().key.as_deref(),
        Some("other-key")
    );

    let list = DataSource::new(document);
    let target = related.article(IndexPath::new(0, 0)).unwrap();
    assert_eq!(list.index_path(target), Some(IndexPath::new(1, 0)));
}
