//! Test helpers module
//!
//! Shared catalogs, stores and setup used by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use quiz_buddy::quiz::{Catalog, Dialogue, Question, QuizEngine, QuizSession};
use quiz_buddy::storage::{MemorySessionStore, SessionStore};
use quiz_buddy::{QuizBuddyError, Result};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// The single-question catalog from the reference scenario
pub fn addition_catalog() -> Catalog {
    Catalog::new("Python", vec![Question::new("1+1?", vec!["1", "2", "3"], "2")])
}

/// Five questions whose correct answer is always "a"
pub fn five_question_catalog() -> Catalog {
    let questions = (1..=5)
        .map(|i| Question::new(format!("Question {}?", i), vec!["a".into(), "b".into(), "c".into()], "a".into()))
        .collect();
    Catalog::new("Python", questions)
}

pub fn memory_dialogue(catalog: Catalog) -> Dialogue<MemorySessionStore> {
    init_test_env();
    Dialogue::new(QuizEngine::new(Arc::new(catalog)), MemorySessionStore::new())
}

/// Store that counts saves and can be switched to fail them
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub inner: MemorySessionStore,
    pub saves: AtomicUsize,
    pub fail_saves: bool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self { fail_saves: true, ..Self::default() }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl SessionStore for RecordingStore {
    async fn load(&self, conversation_id: &str) -> Result<Option<QuizSession>> {
        self.inner.load(conversation_id).await
    }

    async fn save(&self, session: &QuizSession) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves {
            return Err(QuizBuddyError::Storage("store unavailable".to_string()));
        }
        self.inner.save(session).await
    }

    async fn delete(&self, conversation_id: &str) -> Result<()> {
        self.inner.delete(conversation_id).await
    }
}
