use std::collections::HashMap;

use careline_schema::{Sentiment, SentimentLabel};

const CANNED: &[(&str, &str)] = &[
    ("greeting", "Hey! I'm your assistant. How can I help today?"),
    ("bye", "Take care! Come back anytime."),
    ("thanks", "You're welcome! 😊"),
    (
        "help",
        "Tell me briefly what's happening — if it's an emergency, please reach local services.",
    ),
    (
        "symptom",
        "Sorry you're not feeling well. How long and how severe (mild/moderate/severe)?",
    ),
];

const FALLBACK: &str = "I didn’t get that — can you rephrase?";

const NEGATIVE_PROMPT: &str =
    "I'm sorry you're feeling that way. Want breathing tips, a distraction, or to fill a questionnaire?";

const POSITIVE_PROMPT: &str = "That's good to hear! Anything else you'd like help with?";

/// Canned replies keyed by intent tag, with sentiment-driven fallbacks.
pub struct ResponseTable {
    replies: HashMap<&'static str, &'static str>,
}

impl ResponseTable {
    pub fn new() -> Self {
        Self {
            replies: CANNED.iter().copied().collect(),
        }
    }

    /// Pick a reply. Intent takes priority; sentiment is the fallback
    /// signal: negative gets the sympathetic prompt, positive the
    /// acknowledging one, anything else the generic fallback.
    pub fn select(&self, intent: Option<&str>, sentiment: &Sentiment) -> &'static str {
        if let Some(tag) = intent {
            return self.replies.get(tag).copied().unwrap_or(FALLBACK);
        }
        match sentiment.label {
            SentimentLabel::Negative => NEGATIVE_PROMPT,
            SentimentLabel::Positive => POSITIVE_PROMPT,
            SentimentLabel::Neutral => FALLBACK,
        }
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral() -> Sentiment {
        Sentiment {
            score: 0.0,
            label: SentimentLabel::Neutral,
        }
    }

    #[test]
    fn intent_takes_priority_over_sentiment() {
        let table = ResponseTable::new();
        let negative = Sentiment {
            score: -3.0,
            label: SentimentLabel::Negative,
        };
        let reply = table.select(Some("greeting"), &negative);
        assert!(reply.starts_with("Hey!"));
    }

    #[test]
    fn unmapped_intent_falls_back() {
        let table = ResponseTable::new();
        assert_eq!(table.select(Some("no_such_tag"), &neutral()), FALLBACK);
    }

    #[test]
    fn negative_sentiment_gets_sympathetic_prompt() {
        let table = ResponseTable::new();
        let negative = Sentiment {
            score: -2.0,
            label: SentimentLabel::Negative,
        };
        assert_eq!(table.select(None, &negative), NEGATIVE_PROMPT);
    }

    #[test]
    fn positive_sentiment_gets_acknowledgement() {
        let table = ResponseTable::new();
        let positive = Sentiment {
            score: 4.0,
            label: SentimentLabel::Positive,
        };
        assert_eq!(table.select(None, &positive), POSITIVE_PROMPT);
    }

    #[test]
    fn neutral_without_intent_falls_back() {
        let table = ResponseTable::new();
        assert_eq!(table.select(None, &neutral()), FALLBACK);
    }
}
