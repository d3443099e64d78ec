use axum::{extract::State, routing::post, Json, Router};
use careline_schema::{Sentiment, SessionId, Turn};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Missing message degrades to an empty string, which classifies as
    /// neutral with no intent.
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub intent: Option<String>,
    pub sentiment: Sentiment,
    pub session_id: SessionId,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Json<ChatResponse> {
    let text = req.message.trim().to_string();
    let session_id = req
        .session_id
        .filter(|id| !id.is_empty())
        .map(SessionId)
        .unwrap_or_else(SessionId::generate);

    let outcome = state.engine.triage(&text);
    tracing::debug!(
        session_id = %session_id,
        intent = outcome.intent.unwrap_or("none"),
        score = outcome.sentiment.score,
        "chat turn classified"
    );

    state
        .store
        .append(&session_id, Turn::User { text: text.clone() });
    state.store.append(
        &session_id,
        Turn::Bot {
            text: outcome.reply.to_string(),
        },
    );

    Json(ChatResponse {
        reply: outcome.reply.to_string(),
        intent: outcome.intent.map(str::to_string),
        sentiment: outcome.sentiment,
        session_id,
    })
}
