pub mod chat;
pub mod health;
pub mod questionnaire;
pub mod session;

use axum::Router;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(chat::router())
        .merge(questionnaire::router())
        .merge(session::router())
}
