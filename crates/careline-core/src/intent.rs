use anyhow::Result;
use regex::Regex;

/// Default intent rules, evaluated in declaration order. Order is part of
/// the contract: when several patterns match, the earliest rule wins, so
/// these stay an explicit list rather than one combined alternation.
const RULES: &[(&str, &str)] = &[
    ("greeting", r"\b(hi|hello|hey|good morning|good evening)\b"),
    ("bye", r"\b(bye|goodbye|see you|cya)\b"),
    ("thanks", r"\b(thank|thanks|thx)\b"),
    ("help", r"\b(help|support|assist|need)\b"),
    ("symptom", r"\b(fever|cough|headache|nausea|pain|sick|ill)\b"),
];

/// Ordered first-match regex dispatch over lowercased text.
pub struct IntentMatcher {
    rules: Vec<(&'static str, Regex)>,
}

impl IntentMatcher {
    pub fn new() -> Result<Self> {
        let mut rules = Vec::with_capacity(RULES.len());
        for (tag, pattern) in RULES {
            rules.push((*tag, Regex::new(pattern)?));
        }
        Ok(Self { rules })
    }

    /// Return the tag of the first rule whose pattern matches anywhere in
    /// the text, or None when nothing matches.
    pub fn detect(&self, text: &str) -> Option<&'static str> {
        let lower = text.to_lowercase();
        for (tag, pattern) in &self.rules {
            if pattern.is_match(&lower) {
                return Some(*tag);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> IntentMatcher {
        IntentMatcher::new().unwrap()
    }

    #[test]
    fn detects_greeting() {
        assert_eq!(matcher().detect("hello there"), Some("greeting"));
    }

    #[test]
    fn detects_thanks() {
        assert_eq!(matcher().detect("thanks a lot"), Some("thanks"));
    }

    #[test]
    fn detects_symptom() {
        assert_eq!(matcher().detect("I have a headache"), Some("symptom"));
    }

    #[test]
    fn unrelated_text_detects_nothing() {
        assert_eq!(matcher().detect("random unrelated text"), None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(matcher().detect("HELLO!"), Some("greeting"));
    }

    #[test]
    fn first_declared_rule_wins_on_overlap() {
        // Contains both a greeting and a bye trigger; greeting is declared
        // first so it must win.
        assert_eq!(matcher().detect("hi, bye now"), Some("greeting"));
    }

    #[test]
    fn patterns_require_word_boundaries() {
        // "chill" contains "ill" but not on a word boundary.
        assert_eq!(matcher().detect("just chilling"), None);
    }
}
