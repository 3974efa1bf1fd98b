//! Narrative generation — the one LLM-backed stage of the report pipeline.
//!
//! The `NarrativeProvider` trait is what `AppState` carries, so the router
//! tests substitute a stub and never touch the network.

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::assessment::models::{StudentInfo, TraitScores};
use crate::errors::AppError;
use crate::llm_client::prompts::EVIDENCE_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::report::assembler::ReportSection;
use crate::report::prompts::{NARRATIVE_PROMPT_TEMPLATE, NARRATIVE_SYSTEM};

/// The fixed topic list every report covers, in print order.
pub const REPORT_TOPICS: [&str; 5] = [
    "Personality Profile",
    "Career Path Alignment",
    "Strengths and Growth Areas",
    "Recommended Education Path",
    "Action Plan",
];

/// Everything the narrative stage needs from the earlier pure stages.
#[derive(Debug, Clone)]
pub struct NarrativeRequest {
    pub student: StudentInfo,
    pub career_goal: String,
    pub trait_scores: TraitScores,
}

/// Generates topic-segmented guidance narrative for one assessment.
///
/// Held in `AppState` as `Arc<dyn NarrativeProvider>`.
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    async fn generate_sections(
        &self,
        request: &NarrativeRequest,
    ) -> Result<Vec<ReportSection>, AppError>;
}

/// Production provider backed by the shared LLM client.
pub struct LlmNarrativeProvider {
    llm: LlmClient,
}

impl LlmNarrativeProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl NarrativeProvider for LlmNarrativeProvider {
    async fn generate_sections(
        &self,
        request: &NarrativeRequest,
    ) -> Result<Vec<ReportSection>, AppError> {
        let prompt = build_narrative_prompt(request)?;

        let sections: Vec<ReportSection> = self
            .llm
            .call_json(&prompt, NARRATIVE_SYSTEM)
            .await
            .map_err(|e| AppError::Narrative(format!("Narrative generation failed: {e}")))?;

        // Drop anything blank; the orchestrator treats an empty result as a
        // pipeline failure.
        let sections: Vec<ReportSection> = sections
            .into_iter()
            .filter(|s| !s.topic.trim().is_empty() && !s.narrative.trim().is_empty())
            .collect();

        info!(
            "Narrative generated: {} sections for {}",
            sections.len(),
            request.student.name
        );

        Ok(sections)
    }
}

/// Fills the narrative template with serialized assessment context.
fn build_narrative_prompt(request: &NarrativeRequest) -> Result<String, AppError> {
    let student_json = serde_json::to_string_pretty(&request.student)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize student: {e}")))?;

    let scores_json = serde_json::to_string(&request.trait_scores)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize scores: {e}")))?;

    let topics_json = serde_json::to_string(&json!(REPORT_TOPICS))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize topics: {e}")))?;

    Ok(NARRATIVE_PROMPT_TEMPLATE
        .replace("{evidence_instruction}", EVIDENCE_INSTRUCTION)
        .replace("{topics_json}", &topics_json)
        .replace("{career_goal}", &request.career_goal)
        .replace("{student_json}", &student_json)
        .replace("{scores_json}", &scores_json))
}
