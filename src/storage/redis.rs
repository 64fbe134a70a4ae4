//! Redis session storage
//!
//! This module handles persistence of quiz sessions using Redis,
//! including serialization, deserialization and expiration.

use ::redis::AsyncCommands;
use tracing::{debug, warn, error};
use crate::config::RedisConfig;
use crate::quiz::QuizSession;
use crate::utils::errors::Result;
use super::SessionStore;

/// Redis-based session store
#[derive(Clone)]
pub struct RedisSessionStore {
    /// Redis connection manager
    connection_manager: ::redis::aio::ConnectionManager,
    /// Redis configuration
    config: RedisConfig,
}

impl RedisSessionStore {
    /// Connect to Redis
    pub async fn new(config: RedisConfig) -> Result<Self> {
        let client = ::redis::Client::open(config.url.as_str())?;
        let connection_manager = ::redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            config,
        })
    }

    /// Get all conversations with a stored session
    pub async fn active_conversations(&self) -> Result<Vec<String>> {
        let prefix = format!("{}session:", self.config.prefix);
        let pattern = format!("{}*", prefix);
        let mut conn = self.connection_manager.clone();

        let keys: Vec<String> = conn.keys(&pattern).await?;

        let ids: Vec<String> = keys
            .iter()
            .filter_map(|key| key.strip_prefix(&prefix))
            .map(str::to_string)
            .collect();

        debug!("Found {} active quiz sessions", ids.len());
        Ok(ids)
    }

    /// Test Redis connection
    pub async fn test_connection(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = ::redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    /// Seconds a session should live in Redis
    fn ttl_seconds(&self, session: &QuizSession) -> u64 {
        match session.expires_at {
            Some(expires_at) => {
                let remaining = expires_at - chrono::Utc::now();
                std::cmp::max(remaining.num_seconds(), 60) as u64 // Minimum 60 seconds
            }
            None => self.config.ttl_seconds,
        }
    }

    /// Get the Redis key for a conversation's session
    fn session_key(&self, conversation_id: &str) -> String {
        format!("{}session:{}", self.config.prefix, conversation_id)
    }
}

impl SessionStore for RedisSessionStore {
    async fn load(&self, conversation_id: &str) -> Result<Option<QuizSession>> {
        let key = self.session_key(conversation_id);
        debug!(conversation_id = conversation_id, key = %key, "Loading session from Redis");

        let mut conn = self.connection_manager.clone();

        let serialized: Option<String> = match conn.get::<&str, Option<String>>(&key).await {
            Ok(data) => data,
            Err(e) => {
                error!(conversation_id = conversation_id, error = %e, "Failed to get session from Redis");
                return Err(e.into());
            }
        };

        let Some(data) = serialized else {
            debug!(conversation_id = conversation_id, "No session found in Redis");
            return Ok(None);
        };

        let session: QuizSession = match serde_json::from_str(&data) {
            Ok(session) => session,
            Err(e) => {
                error!(conversation_id = conversation_id, error = %e, "Failed to deserialize session");
                return Err(e.into());
            }
        };

        if session.is_expired() {
            warn!(conversation_id = conversation_id, expires_at = ?session.expires_at, "Session has expired, removing");
            self.delete(conversation_id).await?;
            return Ok(None);
        }

        debug!(conversation_id = conversation_id, progress = ?session.progress, "Session loaded");
        Ok(Some(session))
    }

    async fn save(&self, session: &QuizSession) -> Result<()> {
        let key = self.session_key(&session.conversation_id);
        debug!(conversation_id = %session.conversation_id, key = %key, progress = ?session.progress,
               "Saving session to Redis");

        let serialized = serde_json::to_string(session)?;
        let ttl_seconds = self.ttl_seconds(session);

        let mut conn = self.connection_manager.clone();
        match conn.set_ex::<_, _, ()>(&key, serialized, ttl_seconds).await {
            Ok(_) => {
                debug!(conversation_id = %session.conversation_id, ttl_seconds = ttl_seconds, "Session saved to Redis");
                Ok(())
            }
            Err(e) => {
                error!(conversation_id = %session.conversation_id, error = %e, "Failed to save session to Redis");
                Err(e.into())
            }
        }
    }

    async fn delete(&self, conversation_id: &str) -> Result<()> {
        let key = self.session_key(conversation_id);
        let mut conn = self.connection_manager.clone();

        let deleted: u32 = conn.del(&key).await?;
        debug!(conversation_id = conversation_id, deleted = deleted > 0, "Session deletion attempted");

        Ok(())
    }
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
