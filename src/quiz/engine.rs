//! Quiz dialogue engine
//!
//! One turn takes the incoming message and the conversation's session,
//! validates the answer to the pending question, moves to the next question
//! and produces the replies. The engine holds only the read-only catalog and
//! texts; everything that changes lives in [`QuizSession`].

use std::sync::Arc;
use tracing::debug;
use crate::utils::errors::AnswerError;
use crate::utils::logging;
use super::catalog::Catalog;
use super::messages::Messages;
use super::session::QuizSession;

/// A formatted question ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQuestion {
    pub id: usize,
    pub text: String,
}

/// Aggregate correctness of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    /// Catalog length; unanswered questions count as wrong
    pub total: usize,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}

/// What happened to the session during a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnStatus {
    /// The answer was accepted (or none was due) and the session moved on
    Advanced,
    /// The answer was refused; the session is untouched
    Rejected(AnswerError),
}

/// Replies produced by one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub replies: Vec<String>,
    pub status: TurnStatus,
}

impl TurnOutcome {
    /// Whether the session changed and must be saved
    pub fn needs_commit(&self) -> bool {
        self.status == TurnStatus::Advanced
    }
}

/// Turn-taking state machine over a fixed catalog
#[derive(Debug, Clone)]
pub struct QuizEngine {
    catalog: Arc<Catalog>,
    messages: Messages,
}

impl QuizEngine {
    /// Create an engine with the default texts for the catalog's subject
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let messages = Messages::new(catalog.subject.clone());
        Self { catalog, messages }
    }

    /// Replace the texts
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Run one turn against the in-memory session.
    ///
    /// With no pending question (not started, or completed) the turn welcomes
    /// the user and asks the first question again. Earlier answers are kept
    /// and overwritten as questions are re-answered.
    ///
    /// The caller is responsible for persisting the session when
    /// [`TurnOutcome::needs_commit`] is true.
    pub fn respond(&self, message: &str, session: &mut QuizSession) -> TurnOutcome {
        let current_question_id = session.current_question_id();
        let mut replies = Vec::new();

        if current_question_id.is_none() {
            if session.is_completed() {
                debug!(conversation_id = %session.conversation_id, "Restarting completed quiz");
            }
            replies.push(self.messages.welcome.clone());
        }

        if let Err(error) = self.record_answer(message, current_question_id, session) {
            logging::log_answer_rejected(&session.conversation_id, &error, message);
            return TurnOutcome {
                replies: vec![error.to_string()],
                status: TurnStatus::Rejected(error),
            };
        }

        match self.next_question(current_question_id) {
            Some(next) => {
                replies.push(next.text);
                session.advance(Some(next.id));
            }
            None => {
                replies.push(self.finalize(session));
                session.advance(None);
                if let Some(score) = self.score(session) {
                    logging::log_quiz_completed(&session.conversation_id, score.correct, score.total);
                }
            }
        }

        TurnOutcome { replies, status: TurnStatus::Advanced }
    }

    /// Validate `answer` for the pending question and store it.
    ///
    /// With no pending question there is nothing to validate.
    pub fn record_answer(
        &self,
        answer: &str,
        current_question_id: Option<usize>,
        session: &mut QuizSession,
    ) -> Result<(), AnswerError> {
        let Some(question_id) = current_question_id else {
            return Ok(());
        };

        let question = self
            .catalog
            .get(question_id)
            .ok_or(AnswerError::InvalidQuestionId { question_id })?;

        if !question.accepts(answer) {
            return Err(AnswerError::InvalidAnswer { question_id });
        }

        session.record_answer(question_id, answer);
        debug!(conversation_id = %session.conversation_id, question_id, "Answer recorded");
        Ok(())
    }

    /// The question following `current_question_id`, or `None` when the
    /// catalog is exhausted
    pub fn next_question(&self, current_question_id: Option<usize>) -> Option<NextQuestion> {
        let id = current_question_id.map_or(0, |id| id + 1);
        let question = self.catalog.get(id)?;

        Some(NextQuestion { id, text: question.render() })
    }

    /// Score the recorded answers, `None` when nothing was answered
    pub fn score(&self, session: &QuizSession) -> Option<Score> {
        if session.user_answers.is_empty() {
            return None;
        }

        let correct = session
            .user_answers
            .iter()
            .filter(|(id, answer)| {
                self.catalog
                    .get(**id)
                    .is_some_and(|question| question.is_correct(answer))
            })
            .count();

        Some(Score { correct, total: self.catalog.len() })
    }

    /// Human-readable end-of-quiz summary
    pub fn finalize(&self, session: &QuizSession) -> String {
        match self.score(session) {
            Some(score) => self.messages.summary(score.correct, score.total, score.percentage()),
            None => Messages::NO_ANSWERS.to_string(),
        }
    }
}
