//! Quiz session state
//!
//! This module holds the per-conversation progress that is persisted between
//! turns: which question is pending and which answers were accepted so far.
//! A turn never keeps anything in memory beyond what is stored here.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};

/// Where a conversation stands in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "question_id", rename_all = "snake_case")]
pub enum Progress {
    /// No question has been asked yet
    #[default]
    NotStarted,
    /// The question at this index is awaiting an answer
    Pending(usize),
    /// The catalog is exhausted
    Completed,
}

/// Persisted state of one quiz conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    /// Conversation this session belongs to
    pub conversation_id: String,
    /// Current position in the catalog
    pub progress: Progress,
    /// Raw accepted answers keyed by question index
    pub user_answers: BTreeMap<usize, String>,
    /// When this session expires (for cleanup)
    pub expires_at: Option<DateTime<Utc>>,
    /// When this session was last updated
    pub updated_at: DateTime<Utc>,
}

impl QuizSession {
    /// Create an empty session for a conversation
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            progress: Progress::NotStarted,
            user_answers: BTreeMap::new(),
            expires_at: None,
            updated_at: Utc::now(),
        }
    }

    /// Index of the question awaiting an answer
    pub fn current_question_id(&self) -> Option<usize> {
        match self.progress {
            Progress::Pending(id) => Some(id),
            Progress::NotStarted | Progress::Completed => None,
        }
    }

    /// Whether the catalog has been exhausted
    pub fn is_completed(&self) -> bool {
        self.progress == Progress::Completed
    }

    /// Store an accepted answer verbatim
    pub fn record_answer(&mut self, question_id: usize, answer: &str) {
        self.user_answers.insert(question_id, answer.to_string());
        self.updated_at = Utc::now();
    }

    /// Move to the next question, or to `Completed` when there is none
    pub fn advance(&mut self, next_question_id: Option<usize>) {
        self.progress = match next_question_id {
            Some(id) => Progress::Pending(id),
            None => Progress::Completed,
        };
        self.updated_at = Utc::now();
    }

    /// Number of accepted answers
    pub fn answered_count(&self) -> usize {
        self.user_answers.len()
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            Utc::now() > expires_at
        } else {
            false
        }
    }

    /// Push the expiry `duration` past now
    pub fn extend_expiry(&mut self, duration: Duration) {
        let new_expiry = Utc::now()
            .checked_add_signed(duration)
            .unwrap_or_else(|| Utc::now() + Duration::hours(24));

        self.expires_at = Some(new_expiry);
    }

    /// Set custom expiry time
    pub fn set_expiry(&mut self, expires_at: DateTime<Utc>) {
        self.expires_at = Some(expires_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = QuizSession::new("chat-1");
        assert_eq!(session.conversation_id, "chat-1");
        assert_eq!(session.progress, Progress::NotStarted);
        assert!(session.current_question_id().is_none());
        assert!(session.user_answers.is_empty());
        assert!(session.expires_at.is_none());
    }

    #[test]
    fn test_advance() {
        let mut session = QuizSession::new("chat-1");

        session.advance(Some(0));
        assert_eq!(session.current_question_id(), Some(0));
        assert_eq!(session.progress, Progress::Pending(0));

        session.advance(None);
        assert!(session.is_completed());
        assert!(session.current_question_id().is_none());
    }

    #[test]
    fn test_record_answer_keeps_raw_text() {
        let mut session = QuizSession::new("chat-1");
        session.record_answer(2, "DeF");
        assert_eq!(session.user_answers.get(&2).map(String::as_str), Some("DeF"));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_expiry() {
        let mut session = QuizSession::new("chat-1");
        assert!(!session.is_expired());

        session.set_expiry(Utc::now() - Duration::hours(1));
        assert!(session.is_expired());

        session.extend_expiry(Duration::hours(1));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_json_roundtrip_keeps_integer_keys() {
        let mut session = QuizSession::new("chat-1");
        session.advance(Some(1));
        session.record_answer(0, "2");

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains(r#""progress":{"state":"pending","question_id":1}"#));

        let restored: QuizSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_unit_progress_serialization() {
        let json = serde_json::to_string(&Progress::Completed).unwrap();
        assert_eq!(json, r#"{"state":"completed"}"#);
    }
}
