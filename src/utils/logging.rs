//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the QuizBuddy application.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{AnswerError, QuizBuddyError, Result};
use crate::utils::helpers::truncate_text;

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "quizbuddy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| QuizBuddyError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed turn
pub fn log_turn(conversation_id: &str, question_id: Option<usize>, replies: usize, committed: bool) {
    debug!(
        conversation_id = conversation_id,
        question_id = question_id,
        replies = replies,
        committed = committed,
        "Turn handled"
    );
}

/// Log a refused answer
pub fn log_answer_rejected(conversation_id: &str, error: &AnswerError, input: &str) {
    match error {
        AnswerError::InvalidQuestionId { question_id } => warn!(
            conversation_id = conversation_id,
            question_id = question_id,
            "Session points outside the catalog"
        ),
        AnswerError::InvalidAnswer { question_id } => debug!(
            conversation_id = conversation_id,
            question_id = question_id,
            input = %truncate_text(input, 64),
            "Answer rejected"
        ),
    }
}

/// Log the end of a quiz
pub fn log_quiz_completed(conversation_id: &str, correct: usize, total: usize) {
    info!(
        conversation_id = conversation_id,
        correct = correct,
        total = total,
        "Quiz completed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_init_logging_installs_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "debug".to_string(),
            file_path: dir.path().to_string_lossy().into_owned(),
        };

        let _guard = init_logging(&config);
        let second = init_logging(&config);

        assert_matches!(second, Err(QuizBuddyError::Config(_)));
    }
}
