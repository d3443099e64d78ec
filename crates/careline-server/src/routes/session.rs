use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use careline_schema::{SessionId, Turn};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: Vec<Turn>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/session/{session_id}", get(get_session))
}

async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<SessionResponse> {
    Json(SessionResponse {
        session: state.store.get(&SessionId(session_id)),
    })
}
