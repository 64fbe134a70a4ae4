//! Persisted quiz dialogue
//!
//! [`Dialogue`] is the entry point for a transport adapter: it loads the
//! conversation's session, runs one engine turn and commits the session back
//! to the store at most once.

use chrono::Duration;
use tracing::debug;
use crate::storage::SessionStore;
use crate::utils::errors::Result;
use crate::utils::logging;
use super::engine::QuizEngine;
use super::session::QuizSession;

/// Aggregated view of a conversation's progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Turn dispatcher bound to a session store
#[derive(Debug)]
pub struct Dialogue<S> {
    engine: QuizEngine,
    store: S,
    session_ttl: Option<Duration>,
}

impl<S: SessionStore> Dialogue<S> {
    pub fn new(engine: QuizEngine, store: S) -> Self {
        Self {
            engine,
            store,
            session_ttl: None,
        }
    }

    /// Expire sessions this long after their last committed turn
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = Some(ttl);
        self
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle one incoming message and return the replies in order.
    ///
    /// Rejected answers produce a single error reply and leave the stored
    /// session as it was. Store failures are returned as errors.
    pub async fn handle_message(&self, conversation_id: &str, message: &str) -> Result<Vec<String>> {
        let mut session = self.load_or_new(conversation_id).await?;
        debug!(conversation_id = conversation_id, progress = ?session.progress, "Processing message");

        let outcome = self.engine.respond(message, &mut session);
        let committed = outcome.needs_commit();

        if committed {
            if let Some(ttl) = self.session_ttl {
                session.extend_expiry(ttl);
            }
            self.store.save(&session).await?;
        }

        logging::log_turn(conversation_id, session.current_question_id(), outcome.replies.len(), committed);
        Ok(outcome.replies)
    }

    /// Discard the conversation's session; the next message starts over
    pub async fn reset(&self, conversation_id: &str) -> Result<()> {
        self.store.delete(conversation_id).await?;
        debug!(conversation_id = conversation_id, "Session reset");
        Ok(())
    }

    /// Current progress of a conversation
    pub async fn progress(&self, conversation_id: &str) -> Result<SessionProgress> {
        let session = self.load_or_new(conversation_id).await?;
        let total = self.engine.catalog().len();
        let answered = session.answered_count();

        Ok(SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: session.is_completed(),
        })
    }

    async fn load_or_new(&self, conversation_id: &str) -> Result<QuizSession> {
        Ok(self
            .store
            .load(conversation_id)
            .await?
            .unwrap_or_else(|| QuizSession::new(conversation_id)))
    }
}
