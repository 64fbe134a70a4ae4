//! In-process session store
//!
//! Used by the console adapter and by tests. Sessions are cloned in and out,
//! so callers never share a live reference with the store.

use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use crate::quiz::QuizSession;
use crate::utils::errors::Result;
use super::SessionStore;

/// HashMap-backed [`SessionStore`]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, QuizSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, expired ones included
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    async fn load(&self, conversation_id: &str) -> Result<Option<QuizSession>> {
        let session = self.sessions.read().await.get(conversation_id).cloned();

        match session {
            Some(session) if session.is_expired() => {
                debug!(conversation_id = conversation_id, "Session has expired, removing");
                self.sessions.write().await.remove(conversation_id);
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn save(&self, session: &QuizSession) -> Result<()> {
        self.sessions
            .write()
            .await
            .insert(session.conversation_id.clone(), session.clone());
        debug!(conversation_id = %session.conversation_id, "Session saved");
        Ok(())
    }

    async fn delete(&self, conversation_id: &str) -> Result<()> {
        self.sessions.write().await.remove(conversation_id);
        Ok(())
    }
}
