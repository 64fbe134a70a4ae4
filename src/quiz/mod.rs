//! Quiz dialogue module
//!
//! This module holds the question catalog, the per-conversation session
//! state and the engine that drives one question/answer turn at a time.

pub mod catalog;
pub mod dialogue;
pub mod engine;
pub mod messages;
pub mod session;

pub use catalog::{Catalog, Question};
pub use dialogue::{Dialogue, SessionProgress};
pub use engine::{NextQuestion, QuizEngine, Score, TurnOutcome, TurnStatus};
pub use messages::{Messages, ScoreTier};
pub use session::{Progress, QuizSession};
