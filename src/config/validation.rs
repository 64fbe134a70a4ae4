//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{QuizBuddyError, Result};
use super::{Settings, StorageBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_quiz_config(&settings.quiz)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    if settings.storage.backend == StorageBackend::Redis {
        validate_redis_config(&settings.redis)?;
    }

    Ok(())
}

/// Validate quiz configuration
fn validate_quiz_config(config: &super::QuizConfig) -> Result<()> {
    if let Some(subject) = &config.subject {
        if subject.trim().is_empty() {
            return Err(QuizBuddyError::Config(
                "Quiz subject must not be empty when set".to_string()
            ));
        }
    }

    if let Some(path) = &config.catalog_path {
        if path.trim().is_empty() {
            return Err(QuizBuddyError::Config(
                "Catalog path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate session storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.session_ttl_seconds == 0 {
        return Err(QuizBuddyError::Config(
            "Session TTL must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate Redis configuration
fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(QuizBuddyError::Config(
            "Redis URL is required".to_string()
        ));
    }

    if config.ttl_seconds == 0 {
        return Err(QuizBuddyError::Config(
            "Redis TTL must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(QuizBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(QuizBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
