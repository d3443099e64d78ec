use std::collections::HashMap;

use axum::{extract::State, routing::get, Json, Router};
use careline_schema::{QuestionnaireItem, QuestionnaireResult, SessionId, Turn};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionnaireItem>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Raw answer values; anything that is not a JSON number is normalized
    /// to 0 before scoring.
    #[serde(default)]
    pub answers: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    #[serde(flatten)]
    pub result: QuestionnaireResult,
    pub session_id: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/questionnaire", get(get_questions).post(submit))
}

async fn get_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: state.engine.questionnaire().items().to_vec(),
    })
}

/// Coerce a submitted answer to an integer: integers pass through, floats
/// truncate, everything else counts as 0. Range clamping happens in core.
fn normalize_answer(value: &serde_json::Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .unwrap_or(0)
}

async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Json<SubmitResponse> {
    let answers: HashMap<String, i64> = req
        .answers
        .iter()
        .map(|(id, value)| (id.clone(), normalize_answer(value)))
        .collect();

    let result = state.engine.questionnaire().score(&answers);
    tracing::debug!(
        score = result.score,
        category = result.category.as_str(),
        "questionnaire scored"
    );

    if let Some(id) = req.session_id.as_deref().filter(|id| !id.is_empty()) {
        state.store.append(
            &SessionId(id.to_string()),
            Turn::System {
                questionnaire_score: result.score,
            },
        );
    }

    Json(SubmitResponse {
        result,
        session_id: req.session_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_answer_coerces_values() {
        assert_eq!(normalize_answer(&serde_json::json!(2)), 2);
        assert_eq!(normalize_answer(&serde_json::json!(2.7)), 2);
        assert_eq!(normalize_answer(&serde_json::json!(-5)), -5);
        assert_eq!(normalize_answer(&serde_json::json!("3")), 0);
        assert_eq!(normalize_answer(&serde_json::json!(true)), 0);
        assert_eq!(normalize_answer(&serde_json::Value::Null), 0);
    }
}
