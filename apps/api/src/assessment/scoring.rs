//! Trait scoring — a fixed, deterministic rubric over the 30-question
//! assessment. Identical answer sets always produce identical scores; there
//! is no randomness and no I/O.
//!
//! `question1..question30` map round-robin onto six aptitude dimensions.
//! Choice codes `a..d` are worth 4..1 points (numeric strings `1..=4` are
//! accepted as their value). Free-text answers carry no points and are
//! excluded from the denominator, so a trait answered only in prose scores 0
//! rather than dragging the average down.

use serde_json::Value;

use crate::assessment::models::{AnswerSet, TraitScores};

/// The six scored aptitude dimensions, in rubric order.
pub const TRAIT_NAMES: [&str; 6] = [
    "realistic",
    "investigative",
    "artistic",
    "social",
    "enterprising",
    "conventional",
];

const QUESTION_COUNT: u32 = 30;
const MAX_POINTS_PER_ANSWER: u32 = 4;

/// Scores an answer set against the rubric. Question ids outside
/// `question1..question30` are ignored; all six trait keys are always present
/// in the output.
pub fn calculate_scores(answers: &AnswerSet) -> TraitScores {
    let mut points = [0u32; TRAIT_NAMES.len()];
    let mut counted = [0u32; TRAIT_NAMES.len()];

    for (question_id, value) in answers {
        let Some(number) = question_number(question_id) else {
            continue;
        };
        let trait_idx = ((number - 1) as usize) % TRAIT_NAMES.len();

        if let Some(p) = answer_points(value) {
            points[trait_idx] += p;
            counted[trait_idx] += 1;
        }
    }

    TRAIT_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), normalize(points[i], counted[i])))
        .collect()
}

/// Parses `questionN` ids, accepting only the rubric range 1..=30.
fn question_number(question_id: &str) -> Option<u32> {
    let n = question_id.strip_prefix("question")?.parse::<u32>().ok()?;
    (1..=QUESTION_COUNT).contains(&n).then_some(n)
}

/// Point value of a single answer, or `None` for free text and out-of-range
/// codes.
fn answer_points(value: &Value) -> Option<u32> {
    let points = match value {
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "a" => 4,
            "b" => 3,
            "c" => 2,
            "d" => 1,
            other => other.parse::<u32>().ok()?,
        },
        Value::Number(n) => u32::try_from(n.as_u64()?).ok()?,
        _ => return None,
    };
    (1..=MAX_POINTS_PER_ANSWER).contains(&points).then_some(points)
}

/// Normalizes accumulated points to 0–100 against the per-trait maximum.
fn normalize(points: u32, counted: u32) -> u32 {
    if counted == 0 {
        return 0;
    }
    let max = counted * MAX_POINTS_PER_ANSWER;
    ((points as f64 / max as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers_from(entries: &[(&str, Value)]) -> AnswerSet {
        let mut map = AnswerSet::new();
        for (k, v) in entries {
            map.insert(k.to_string(), v.clone());
        }
        map
    }

    fn full_answers(code: &str) -> AnswerSet {
        let mut map = AnswerSet::new();
        for n in 1..=30 {
            map.insert(format!("question{n}"), json!(code));
        }
        map
    }

    #[test]
    fn test_identical_input_identical_output() {
        let answers = answers_from(&[
            ("question1", json!("a")),
            ("question2", json!("c")),
            ("question7", json!("b")),
            ("question13", json!("Won the state science fair")),
        ]);
        let first = calculate_scores(&answers);
        let second = calculate_scores(&answers);
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_top_codes_score_100_everywhere() {
        let scores = calculate_scores(&full_answers("a"));
        for name in TRAIT_NAMES {
            assert_eq!(scores[name], 100, "trait {name}");
        }
    }

    #[test]
    fn test_all_bottom_codes_score_25_everywhere() {
        // "d" = 1 point of a possible 4
        let scores = calculate_scores(&full_answers("d"));
        for name in TRAIT_NAMES {
            assert_eq!(scores[name], 25, "trait {name}");
        }
    }

    #[test]
    fn test_all_six_traits_always_present() {
        let scores = calculate_scores(&AnswerSet::new());
        assert_eq!(scores.len(), TRAIT_NAMES.len());
        for name in TRAIT_NAMES {
            assert_eq!(scores[name], 0);
        }
    }

    #[test]
    fn test_free_text_contributes_nothing() {
        // question1 and question7 both land on "realistic"; the free-text
        // answer must not dilute the code answer.
        let answers = answers_from(&[
            ("question1", json!("a")),
            ("question7", json!("I enjoy building furniture")),
        ]);
        let scores = calculate_scores(&answers);
        assert_eq!(scores["realistic"], 100);
    }

    #[test]
    fn test_numeric_answers_accepted() {
        let answers = answers_from(&[("question1", json!("3")), ("question7", json!(1))]);
        let scores = calculate_scores(&answers);
        // (3 + 1) of 8 possible
        assert_eq!(scores["realistic"], 50);
    }

    #[test]
    fn test_unknown_question_ids_ignored() {
        let answers = answers_from(&[
            ("question1", json!("a")),
            ("question99", json!("a")),
            ("favourite_colour", json!("a")),
        ]);
        let with_noise = calculate_scores(&answers);
        let clean = calculate_scores(&answers_from(&[("question1", json!("a"))]));
        assert_eq!(with_noise, clean);
    }

    #[test]
    fn test_scores_bounded_0_to_100() {
        let answers = answers_from(&[
            ("question1", json!("a")),
            ("question2", json!("9")),
            ("question3", json!("d")),
        ]);
        for score in calculate_scores(&answers).values() {
            assert!(*score <= 100);
        }
    }

    #[test]
    fn test_codes_case_insensitive() {
        let upper = calculate_scores(&answers_from(&[("question1", json!("A"))]));
        let lower = calculate_scores(&answers_from(&[("question1", json!("a"))]));
        assert_eq!(upper, lower);
    }
}
