//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub quiz: QuizConfig,
    pub storage: StorageConfig,
    pub redis: RedisConfig,
    pub logging: LoggingConfig,
}

/// Quiz content configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    /// Overrides the catalog's subject in the welcome message and remarks
    pub subject: Option<String>,
    /// Optional TOML catalog; the built-in catalog is used when absent
    pub catalog_path: Option<String>,
    /// Overrides the default welcome text
    pub welcome_message: Option<String>,
}

/// Which session store backs the dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Redis,
}

/// Session storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub session_ttl_seconds: u64,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisConfig {
    pub url: String,
    pub prefix: String,
    pub ttl_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("storage.backend", "memory")?
            .set_default("storage.session_ttl_seconds", defaults.storage.session_ttl_seconds)?
            .set_default("redis.url", defaults.redis.url)?
            .set_default("redis.prefix", defaults.redis.prefix)?
            .set_default("redis.ttl_seconds", defaults.redis.ttl_seconds)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.file_path", defaults.logging.file_path)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("QUIZBUDDY").prefix_separator("_").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::QuizBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quiz: QuizConfig::default(),
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                session_ttl_seconds: 86400,
            },
            redis: RedisConfig {
                url: "redis://localhost:6379".to_string(),
                prefix: "quizbuddy:".to_string(),
                ttl_seconds: 86400,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
            },
        }
    }
}
