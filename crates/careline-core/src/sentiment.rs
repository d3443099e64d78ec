use std::collections::HashMap;

use anyhow::Result;
use careline_schema::{Sentiment, SentimentLabel};
use regex::Regex;

/// Word-weight tables for polarity scoring. The positive and negative
/// tables are independent mappings: a token present in both accumulates
/// both weights.
pub struct SentimentLexicon {
    positive: HashMap<&'static str, f64>,
    negative: HashMap<&'static str, f64>,
    word: Regex,
}

const POSITIVE: &[(&str, f64)] = &[
    ("good", 1.0),
    ("great", 2.0),
    ("happy", 2.0),
    ("love", 2.0),
    ("liked", 1.0),
    ("awesome", 2.0),
    ("helpful", 1.0),
    ("ok", 1.0),
    ("fine", 1.0),
    ("better", 1.0),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("sad", -1.0),
    ("bad", -1.0),
    ("terrible", -2.0),
    ("angry", -2.0),
    ("hate", -2.0),
    ("upset", -1.0),
    ("anxious", -1.0),
    ("worried", -1.0),
    ("stressed", -1.0),
    ("depressed", -2.0),
    ("tired", -1.0),
    ("pain", -1.0),
    ("sick", -1.0),
    // negation softener, weaker than any full sentiment word
    ("not", -0.2),
];

impl SentimentLexicon {
    pub fn new() -> Result<Self> {
        Ok(Self {
            positive: POSITIVE.iter().copied().collect(),
            negative: NEGATIVE.iter().copied().collect(),
            word: Regex::new(r"\w+")?,
        })
    }

    /// Score free text: lowercase, split into word-character runs, sum the
    /// table weight of every known token. Labels: score > 1 positive,
    /// score < -1 negative, otherwise neutral. Empty text scores 0.0.
    pub fn analyze(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();
        let mut score = 0.0;
        for token in self.word.find_iter(&lower) {
            let token = token.as_str();
            if let Some(w) = self.positive.get(token) {
                score += w;
            }
            if let Some(w) = self.negative.get(token) {
                score += w;
            }
        }

        let label = if score > 1.0 {
            SentimentLabel::Positive
        } else if score < -1.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        Sentiment { score, label }
    }
}
