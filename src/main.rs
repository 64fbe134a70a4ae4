//! QuizBuddy console bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use tracing::info;

use quiz_buddy::{
    config::{Settings, StorageBackend},
    handlers::console,
    quiz::{Catalog, Dialogue, Messages, QuizEngine},
    storage::{MemorySessionStore, RedisSessionStore, SessionStore},
    utils::{helpers, logging},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", quiz_buddy::info());

    let engine = build_engine(&settings).await?;
    let conversation_id = std::env::var("QUIZBUDDY_CONVERSATION_ID")
        .unwrap_or_else(|_| helpers::generate_uuid());
    let ttl = chrono::Duration::seconds(settings.storage.session_ttl_seconds as i64);

    match settings.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory session storage");
            let dialogue = Dialogue::new(engine, MemorySessionStore::new()).with_session_ttl(ttl);
            run_console(&dialogue, &conversation_id).await?;
        }
        StorageBackend::Redis => {
            info!("Connecting to Redis...");
            let store = RedisSessionStore::new(settings.redis.clone()).await?;
            store.test_connection().await?;
            let active = store.active_conversations().await?;
            info!("Found {} active quiz sessions", active.len());
            let dialogue = Dialogue::new(engine, store).with_session_ttl(ttl);
            run_console(&dialogue, &conversation_id).await?;
        }
    }

    info!("QuizBuddy stopped");
    Ok(())
}

/// Load the catalog and apply configured texts
async fn build_engine(settings: &Settings) -> anyhow::Result<QuizEngine> {
    let catalog = match &settings.quiz.catalog_path {
        Some(path) => Catalog::load(path)
            .await
            .with_context(|| format!("failed to load catalog from {}", path))?,
        None => Catalog::python_basics(),
    };
    info!(subject = %catalog.subject, questions = catalog.len(), "Catalog ready");

    let subject = settings.quiz.subject.clone().unwrap_or_else(|| catalog.subject.clone());
    let mut messages = Messages::new(subject);
    if let Some(welcome) = &settings.quiz.welcome_message {
        messages = messages.with_welcome(welcome.clone());
    }

    Ok(QuizEngine::new(Arc::new(catalog)).with_messages(messages))
}

async fn run_console<S: SessionStore>(dialogue: &Dialogue<S>, conversation_id: &str) -> anyhow::Result<()> {
    println!("Send any message to start the quiz. Commands: /progress, /restart, /quit\n");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    console::run(dialogue, conversation_id, stdin, tokio::io::stdout()).await?;
    Ok(())
}
