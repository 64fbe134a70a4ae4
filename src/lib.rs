//! QuizBuddy
//!
//! A turn-based quiz bot. Each incoming message is handled by an independent
//! call: the conversation's session is loaded from a store, the pending answer
//! is validated, the next question (or the final score) is produced and the
//! session is committed back.

pub mod config;
pub mod handlers;
pub mod quiz;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{QuizBuddyError, AnswerError, Result};

// Re-export main components for easy access
pub use quiz::{Catalog, Dialogue, Question, QuizEngine, QuizSession};
pub use storage::{MemorySessionStore, RedisSessionStore, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
