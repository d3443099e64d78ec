use std::sync::Arc;

use anyhow::Result;
use careline_core::{Engine, SessionStore};

/// Shared application state accessible from all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable classification tables (sentiment, intents, questionnaire)
    pub engine: Arc<Engine>,
    /// In-memory session log store
    pub store: Arc<SessionStore>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: Arc::new(Engine::new()?),
            store: Arc::new(SessionStore::new()),
        })
    }
}
