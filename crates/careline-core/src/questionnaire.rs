use std::collections::HashMap;

use careline_schema::{QuestionnaireItem, QuestionnaireResult, Severity};

const ITEMS: &[(&str, &str)] = &[
    (
        "q1",
        "Over the last 2 weeks, how often have you felt down, depressed, or hopeless?",
    ),
    (
        "q2",
        "Over the last 2 weeks, how often have you had trouble sleeping?",
    ),
    (
        "q3",
        "Over the last 2 weeks, how often have you felt little interest in doing things?",
    ),
    (
        "q4",
        "Over the last 2 weeks, how often have you felt anxious or nervous?",
    ),
    (
        "q5",
        "Over the last 2 weeks, how often have you had difficulty concentrating?",
    ),
];

const ITEM_MAX: i64 = 3;

/// The fixed 5-item screening questionnaire and its severity banding.
pub struct Questionnaire {
    items: Vec<QuestionnaireItem>,
    max_score: i64,
}

impl Questionnaire {
    pub fn new() -> Self {
        let items: Vec<QuestionnaireItem> = ITEMS
            .iter()
            .map(|(id, text)| QuestionnaireItem {
                id: (*id).to_string(),
                text: (*text).to_string(),
                max: ITEM_MAX,
            })
            .collect();
        let max_score = items.iter().map(|item| item.max).sum();
        Self { items, max_score }
    }

    pub fn items(&self) -> &[QuestionnaireItem] {
        &self.items
    }

    pub fn max_score(&self) -> i64 {
        self.max_score
    }

    /// Score submitted answers. Missing items count as 0; out-of-range
    /// values clamp into [0, item.max] rather than failing the request.
    pub fn score(&self, answers: &HashMap<String, i64>) -> QuestionnaireResult {
        let mut score = 0;
        for item in &self.items {
            let raw = answers.get(&item.id).copied().unwrap_or(0);
            score += raw.clamp(0, item.max);
        }

        let ratio = score as f64 / self.max_score as f64;
        let (category, advice) = if ratio >= 0.8 {
            (
                Severity::High,
                "Please consider seeking professional help soon.",
            )
        } else if ratio >= 0.5 {
            (
                Severity::Moderate,
                "Monitor and consider talking to a counselor.",
            )
        } else {
            (Severity::Low, "Symptoms are low — keep self-care and tracking.")
        };

        QuestionnaireResult {
            score,
            max_score: self.max_score,
            category,
            advice: advice.to_string(),
        }
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new()
    }
}
