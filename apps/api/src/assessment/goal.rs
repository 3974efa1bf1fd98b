//! Career-goal extraction — a pure scan over answer values in submission
//! order. Absence is `None`, never `Some("")`; the orchestrator treats
//! absence as a terminal processing failure.
//!
//! Two passes:
//! 1. free-text cue phrases ("i want to become …") — the stated goal wins
//!    over anything inferred from choice codes, wherever it appears;
//! 2. career-field choice codes ("tech", "medicine", …) mapped to canonical
//!    goal strings.
//! Within a pass, the first match in answer order wins.

/// Phrases that introduce a stated goal in free-text answers.
const GOAL_CUES: &[&str] = &[
    "i want to become",
    "i want to be",
    "i would like to become",
    "i would like to be",
    "my goal is to become",
    "my goal is to be",
    "my career goal is",
    "my dream is to become",
    "my dream is to be",
    "my dream job is",
    "aspire to become",
    "aspire to be",
];

/// Career-field choice codes offered by the assessment, with the goal string
/// each maps to.
const FIELD_GOALS: &[(&str, &str)] = &[
    ("tech", "Technology and Engineering"),
    ("technology", "Technology and Engineering"),
    ("engineering", "Technology and Engineering"),
    ("medicine", "Medicine and Healthcare"),
    ("healthcare", "Medicine and Healthcare"),
    ("business", "Business and Management"),
    ("commerce", "Business and Management"),
    ("arts", "Creative Arts and Design"),
    ("creative", "Creative Arts and Design"),
    ("design", "Creative Arts and Design"),
    ("science", "Scientific Research"),
    ("research", "Scientific Research"),
    ("law", "Law and Public Policy"),
    ("education", "Education and Teaching"),
    ("teaching", "Education and Teaching"),
];

/// Scans answer values (in the order given) for a stated or inferred career
/// goal. Returns `None` when nothing matches.
pub fn extract_career_goal(values: &[String]) -> Option<String> {
    for value in values {
        let lower = value.to_lowercase();

        // Pick the earliest cue; on a tie the longest wins, so
        // "i want to become" is never shadowed by its prefix "i want to be".
        let mut best: Option<(usize, &str)> = None;
        for cue in GOAL_CUES {
            if let Some(pos) = lower.find(cue) {
                let better = match best {
                    None => true,
                    Some((best_pos, best_cue)) => {
                        pos < best_pos || (pos == best_pos && cue.len() > best_cue.len())
                    }
                };
                if better {
                    best = Some((pos, cue));
                }
            }
        }

        if let Some((pos, cue)) = best {
            let start = pos + cue.len();
            // Lowercasing can shift byte offsets for non-ASCII input;
            // fall back to the lowered string when it does.
            let tail = if value.len() == lower.len() && value.is_char_boundary(start) {
                &value[start..]
            } else {
                &lower[start..]
            };
            if let Some(goal) = clean_goal_phrase(tail) {
                return Some(goal);
            }
        }
    }

    for value in values {
        let code = value.trim().to_lowercase();
        if let Some((_, goal)) = FIELD_GOALS.iter().find(|(key, _)| *key == code) {
            return Some(goal.to_string());
        }
    }

    None
}

/// Tidies the text following a cue phrase: strips a leading article, cuts at
/// the first sentence break, and capitalizes the first letter. Returns `None`
/// when nothing usable remains.
fn clean_goal_phrase(tail: &str) -> Option<String> {
    let mut phrase = tail.trim_start_matches(|c: char| c.is_whitespace() || c == ':');

    for article in ["a ", "an ", "the "] {
        if phrase.len() > article.len()
            && phrase.is_char_boundary(article.len())
            && phrase[..article.len()].eq_ignore_ascii_case(article)
        {
            phrase = &phrase[article.len()..];
            break;
        }
    }

    let phrase = phrase
        .split(['.', ',', ';', '!', '?', '\n'])
        .next()
        .unwrap_or("")
        .trim();

    if phrase.is_empty() {
        return None;
    }

    let mut chars = phrase.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().collect::<String>() + chars.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extracts_stated_goal_from_free_text() {
        let answers = values(&[
            "b",
            "I want to become a software engineer. Mostly backend work.",
            "c",
        ]);
        assert_eq!(
            extract_career_goal(&answers),
            Some("Software engineer".to_string())
        );
    }

    #[test]
    fn test_cue_matching_is_case_insensitive() {
        let answers = values(&["My Goal Is To Become An Architect"]);
        assert_eq!(extract_career_goal(&answers), Some("Architect".to_string()));
    }

    #[test]
    fn test_field_code_maps_to_canonical_goal() {
        let answers = values(&["a", "tech", "d"]);
        assert_eq!(
            extract_career_goal(&answers),
            Some("Technology and Engineering".to_string())
        );
    }

    #[test]
    fn test_stated_goal_beats_field_code_regardless_of_order() {
        let answers = values(&["medicine", "I want to be a pilot"]);
        assert_eq!(extract_career_goal(&answers), Some("Pilot".to_string()));
    }

    #[test]
    fn test_first_match_wins_within_a_pass() {
        let answers = values(&["law", "tech"]);
        assert_eq!(
            extract_career_goal(&answers),
            Some("Law and Public Policy".to_string())
        );
    }

    #[test]
    fn test_no_goal_yields_none() {
        let answers = values(&["a", "b", "c", "d", "I enjoy reading"]);
        assert_eq!(extract_career_goal(&answers), None);
    }

    #[test]
    fn test_empty_values_yield_none() {
        assert_eq!(extract_career_goal(&[]), None);
        assert_eq!(extract_career_goal(&values(&["", "  "])), None);
    }

    #[test]
    fn test_never_returns_empty_string() {
        // Cue present but nothing after it
        let answers = values(&["I want to become"]);
        assert_eq!(extract_career_goal(&answers), None);
    }

    #[test]
    fn test_trailing_clause_is_cut() {
        let answers = values(&["my dream is to become a doctor, like my mother"]);
        assert_eq!(extract_career_goal(&answers), Some("Doctor".to_string()));
    }
}
