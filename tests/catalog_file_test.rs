//! Catalog file loading tests

use std::io::Write;

use quiz_buddy::quiz::Catalog;
use quiz_buddy::QuizBuddyError;

fn write_catalog(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write catalog");
    file
}

#[tokio::test]
async fn test_load_valid_catalog() {
    let file = write_catalog(
        r#"
        subject = "Rust"

        [[questions]]
        question = "Which keyword declares an immutable binding?"
        options = ["let", "mut", "var"]
        answer = "let"

        [[questions]]
        question = "Which type owns a growable string?"
        options = ["&str", "String"]
        answer = "string"
        "#,
    );

    let catalog = Catalog::load(file.path()).await.unwrap();

    assert_eq!(catalog.subject, "Rust");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(1).map(|q| q.answer.as_str()), Some("string"));
}

#[tokio::test]
async fn test_load_rejects_unanswerable_question() {
    let file = write_catalog(
        r#"
        subject = "Rust"

        [[questions]]
        question = "Pick one"
        options = ["a", "b"]
        answer = "c"
        "#,
    );

    let result = Catalog::load(file.path()).await;

    assert!(matches!(result, Err(QuizBuddyError::InvalidInput(_))));
}

#[tokio::test]
async fn test_load_reports_parse_errors() {
    let file = write_catalog("subject = \n");

    let result = Catalog::load(file.path()).await;

    assert!(matches!(result, Err(QuizBuddyError::CatalogParse(_))));
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let result = Catalog::load(dir.path().join("missing.toml")).await;

    assert!(matches!(result, Err(QuizBuddyError::Io(_))));
}
