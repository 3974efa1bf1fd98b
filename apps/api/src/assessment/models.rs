use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Raw assessment answers: question id → answer value (choice code or free
/// text). Backed by serde_json's insertion-ordered map so downstream passes
/// see answers in the order the client sent them.
pub type AnswerSet = serde_json::Map<String, Value>;

/// Trait name → score (0–100). BTreeMap keeps key order stable so identical
/// inputs serialize identically.
pub type TraitScores = BTreeMap<String, u32>;

/// Answers holding the student's free-text achievement statements.
const ACHIEVEMENT_QUESTIONS: [&str; 2] = ["question13", "question30"];

/// Per-request student record assembled from the submission body and the
/// answer set. Everything is stringly-typed on purpose: the frontend sends
/// ages as numbers or strings interchangeably.
#[derive(Debug, Clone, Serialize)]
pub struct StudentInfo {
    pub name: String,
    pub age: String,
    pub academic_info: String,
    pub interests: String,
    pub achievements: Vec<String>,
}

impl StudentInfo {
    /// Builds the student record. Missing fields fall back to the same
    /// placeholder strings the report prompts were written against.
    pub fn from_submission(
        student_name: Option<&str>,
        age: Option<&Value>,
        academic_info: Option<&Value>,
        interests: Option<&Value>,
        answers: &AnswerSet,
    ) -> Self {
        let achievements = ACHIEVEMENT_QUESTIONS
            .iter()
            .map(|q| {
                answers
                    .get(*q)
                    .map(answer_text)
                    .unwrap_or_else(|| "None".to_string())
            })
            .collect();

        StudentInfo {
            name: student_name.unwrap_or("Student").trim().to_string(),
            age: optional_text(age),
            academic_info: optional_text(academic_info),
            interests: optional_text(interests),
            achievements,
        }
    }
}

/// Renders an answer value as plain text: strings verbatim, everything else
/// via its JSON representation.
pub fn answer_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn optional_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Null) | None => "Not provided".to_string(),
        Some(v) => answer_text(v),
    }
}
