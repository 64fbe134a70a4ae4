//! Console transport integration tests

mod helpers;

use std::sync::Arc;

use helpers::*;
use quiz_buddy::handlers::console;
use quiz_buddy::quiz::{Dialogue, QuizEngine};

async fn run_script(script: &str) -> String {
    let dialogue = memory_dialogue(addition_catalog());
    let mut output = Vec::new();

    console::run(&dialogue, "console", script.as_bytes(), &mut output)
        .await
        .expect("console run should succeed");

    String::from_utf8(output).expect("output should be UTF-8")
}

#[tokio::test]
async fn test_full_quiz_over_console() {
    let output = run_script("hi\n2\n").await;

    assert!(output.starts_with("Welcome to the Python quiz!"));
    assert!(output.contains("\n\n1+1?\n1. 1\n2. 2\n3. 3\n\n"));
    assert!(output.ends_with("Excellent job! You've mastered Python!\n\n"));
}

#[tokio::test]
async fn test_invalid_answer_over_console() {
    let output = run_script("hi\n  nine \n").await;

    assert!(output.ends_with("Invalid answer. Please choose from the provided options.\n\n"));
}

#[tokio::test]
async fn test_progress_and_restart_commands() {
    let output = run_script("hi\n/progress\n2\n/progress\n/restart\n/progress\n").await;

    assert!(output.contains("Answered 0 of 1 questions\n\n"));
    assert!(output.contains("Answered 1 of 1 questions (completed)\n\n"));
    assert!(output.contains("Quiz restarted. Send any message to begin.\n\nAnswered 0 of 1 questions\n\n"));
}

#[tokio::test]
async fn test_quit_stops_reading() {
    let output = run_script("/quit\nhi\n").await;

    assert!(output.is_empty());
}

#[tokio::test]
async fn test_store_failure_apologizes_and_keeps_reading() {
    init_test_env();
    let dialogue = Dialogue::new(QuizEngine::new(Arc::new(addition_catalog())), RecordingStore::failing());
    let mut output = Vec::new();

    console::run(&dialogue, "console", "hi\nhi again\n/progress\n".as_bytes(), &mut output)
        .await
        .expect("recoverable failures should not end the conversation");

    let output = String::from_utf8(output).unwrap();
    assert_eq!(
        output,
        format!("{0}\n\n{0}\n\nAnswered 0 of 1 questions\n\n", console::TURN_FAILED)
    );
    assert_eq!(dialogue.store().save_count(), 2);
}
