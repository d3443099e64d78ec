use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque session identifier. Callers may supply their own; the server
/// generates a v4 UUID when none is given.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recorded exchange unit in a session log. Serializes with a `from`
/// tag so a user turn reads `{"from":"user","text":"..."}` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "from", rename_all = "snake_case")]
pub enum Turn {
    User { text: String },
    Bot { text: String },
    System { questionnaire_score: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Polarity score plus its 3-way label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub score: f64,
    pub label: SentimentLabel,
}

/// One questionnaire item: prompt text and the highest answerable value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireItem {
    pub id: String,
    pub text: String,
    pub max: i64,
}

/// Severity category derived from the score/max ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Moderate,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireResult {
    pub score: i64,
    pub max_score: i64,
    pub category: Severity,
    pub advice: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_wire_format_is_from_tagged() {
        let turn = Turn::User {
            text: "hello".to_string(),
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["from"], "user");
        assert_eq!(json["text"], "hello");

        let turn = Turn::System {
            questionnaire_score: 7,
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["from"], "system");
        assert_eq!(json["questionnaire_score"], 7);
    }

    #[test]
    fn turn_serde_roundtrip() {
        let turns = vec![
            Turn::User {
                text: "hi".to_string(),
            },
            Turn::Bot {
                text: "hello back".to_string(),
            },
            Turn::System {
                questionnaire_score: 12,
            },
        ];
        let json = serde_json::to_string(&turns).unwrap();
        let back: Vec<Turn> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, turns);
    }

    #[test]
    fn sentiment_label_serializes_lowercase() {
        let s = Sentiment {
            score: -2.0,
            label: SentimentLabel::Negative,
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["label"], "negative");
        assert_eq!(json["score"], -2.0);
    }

    #[test]
    fn severity_serializes_capitalized() {
        let json = serde_json::to_value(Severity::Moderate).unwrap();
        assert_eq!(json, "Moderate");
    }

    #[test]
    fn generated_session_ids_are_unique() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert!(!a.0.is_empty());
    }
}
