//! Session storage module
//!
//! The dialogue never keeps conversation state in memory between turns.
//! Every turn loads the session through a [`SessionStore`], mutates it and
//! commits it back once.

pub mod memory;
pub mod redis;

use std::future::Future;
use crate::quiz::QuizSession;
use crate::utils::errors::Result;

pub use memory::MemorySessionStore;
pub use self::redis::RedisSessionStore;

/// Persistence contract for quiz sessions.
///
/// Errors are returned to the caller as-is; stores do not retry.
pub trait SessionStore: Send + Sync {
    /// Load a session, `None` if absent or expired
    fn load(&self, conversation_id: &str) -> impl Future<Output = Result<Option<QuizSession>>> + Send;

    /// Persist a session under its conversation id
    fn save(&self, session: &QuizSession) -> impl Future<Output = Result<()>> + Send;

    /// Remove a session
    fn delete(&self, conversation_id: &str) -> impl Future<Output = Result<()>> + Send;
}
