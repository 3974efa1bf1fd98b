// Shared prompt constants.
// The narrative service defines its own prompts.rs alongside it;
// this file contains cross-cutting fragments.

/// Instruction appended to narrative prompts so generated guidance stays
/// anchored to the assessment data instead of generic advice.
pub const EVIDENCE_INSTRUCTION: &str = "\
    CRITICAL: Ground every observation in the trait scores and student \
    information provided. Do NOT invent qualifications, achievements, or \
    circumstances that are not present in the input. When a trait score is \
    low, address it constructively rather than omitting it.";
