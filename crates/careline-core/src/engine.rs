use anyhow::Result;
use careline_schema::Sentiment;

use crate::intent::IntentMatcher;
use crate::questionnaire::Questionnaire;
use crate::reply::ResponseTable;
use crate::sentiment::SentimentLexicon;

/// Result of classifying one inbound message.
#[derive(Debug, Clone)]
pub struct TriageOutcome {
    pub intent: Option<&'static str>,
    pub sentiment: Sentiment,
    pub reply: &'static str,
}

/// The immutable classification tables, built once at startup and shared
/// across all requests.
pub struct Engine {
    lexicon: SentimentLexicon,
    intents: IntentMatcher,
    responses: ResponseTable,
    questionnaire: Questionnaire,
}

impl Engine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            lexicon: SentimentLexicon::new()?,
            intents: IntentMatcher::new()?,
            responses: ResponseTable::new(),
            questionnaire: Questionnaire::new(),
        })
    }

    /// Classify a message: sentiment and intent are computed independently,
    /// then the reply is selected with intent taking priority.
    pub fn triage(&self, text: &str) -> TriageOutcome {
        let sentiment = self.lexicon.analyze(text);
        let intent = self.intents.detect(text);
        let reply = self.responses.select(intent, &sentiment);
        TriageOutcome {
            intent,
            sentiment,
            reply,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }
}

#[cfg(test)]
mod tests {
    use careline_schema::SentimentLabel;

    use super::*;

    #[test]
    fn intent_wins_over_negative_sentiment() {
        let engine = Engine::new().unwrap();
        // "sick" is both a negative lexicon word and a symptom trigger.
        let out = engine.triage("I feel sick and terrible");
        assert_eq!(out.intent, Some("symptom"));
        assert_eq!(out.sentiment.label, SentimentLabel::Negative);
        assert!(out.reply.starts_with("Sorry you're not feeling well"));
    }

    #[test]
    fn negative_without_intent_gets_sympathy() {
        let engine = Engine::new().unwrap();
        let out = engine.triage("feeling sad and stressed");
        assert_eq!(out.intent, None);
        assert_eq!(out.sentiment.label, SentimentLabel::Negative);
        assert!(out.reply.contains("breathing tips"));
    }

    #[test]
    fn neutral_without_intent_gets_fallback() {
        let engine = Engine::new().unwrap();
        let out = engine.triage("the weather is a thing");
        assert_eq!(out.intent, None);
        assert_eq!(out.sentiment.label, SentimentLabel::Neutral);
        assert!(out.reply.contains("rephrase"));
    }
}
