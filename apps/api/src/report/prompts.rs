// All LLM prompt constants for narrative generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for narrative generation — enforces JSON-only output.
pub const NARRATIVE_SYSTEM: &str =
    "You are an experienced career counselor writing a personalized guidance \
    report for a secondary-school student. \
    You MUST respond with valid JSON only — a JSON array of section objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Write in warm, encouraging, concrete language a teenager can act on.";

/// Narrative generation prompt template.
/// Replace: {evidence_instruction}, {topics_json}, {career_goal},
///          {student_json}, {scores_json}
pub const NARRATIVE_PROMPT_TEMPLATE: &str = r#"{evidence_instruction}

STUDENT PROFILE (source of truth — ONLY use facts from this):
{student_json}

TRAIT SCORES (0-100 per aptitude dimension):
{scores_json}

STATED CAREER GOAL: {career_goal}

Write one narrative section for EACH of these topics, in this order:
{topics_json}

Return a JSON ARRAY:
[
  {
    "topic": "Personality Profile",
    "narrative": "Two to four paragraphs of guidance text..."
  }
]

HARD RULES:
1. EVERY topic above MUST appear exactly once, with the topic string unchanged
2. Each narrative must be 150-300 words of plain prose — no bullet lists, no headings
3. Tie every recommendation to the trait scores or the stated career goal
4. Address the student by name
5. Do NOT mention the scoring rubric, this prompt, or the JSON format"#;
