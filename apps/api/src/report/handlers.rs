//! Axum route handlers — the request orchestrator.
//!
//! Submission runs the full pipeline in order: validate → score → extract
//! goal → generate narrative → assemble → render → upload → respond. Each
//! stage is awaited to completion and any failure is terminal for the
//! request; nothing is retried here.

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::assessment::goal::extract_career_goal;
use crate::assessment::models::{answer_text, AnswerSet, StudentInfo};
use crate::assessment::scoring::calculate_scores;
use crate::errors::AppError;
use crate::report::assembler::build_report_data;
use crate::report::narrative::NarrativeRequest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentRequest {
    /// Kept as raw JSON so the handler can distinguish "missing" from
    /// "present but not a mapping" — the two cases report differently.
    pub answers: Option<Value>,
    pub student_name: Option<String>,
    pub age: Option<Value>,
    pub academic_info: Option<Value>,
    pub interests: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAssessmentResponse {
    pub message: String,
    pub report_url: String,
    pub file_id: String,
    pub file_name: String,
    pub student_name: String,
    pub career_goal: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/submit-assessment
///
/// Full pipeline from raw answers to a shareable report link.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    body: Result<Json<SubmitAssessmentRequest>, JsonRejection>,
) -> Result<Json<SubmitAssessmentResponse>, AppError> {
    let Json(request) =
        body.map_err(|_| AppError::Validation("Invalid JSON data".to_string()))?;

    let answers = validate_answers(request.answers.as_ref())?;

    let trait_scores = calculate_scores(answers);

    let student = StudentInfo::from_submission(
        request.student_name.as_deref(),
        request.age.as_ref(),
        request.academic_info.as_ref(),
        request.interests.as_ref(),
        answers,
    );

    let answer_values: Vec<String> = answers.values().map(answer_text).collect();
    let career_goal = extract_career_goal(&answer_values)
        .ok_or_else(|| AppError::Processing("Failed to extract career goal".to_string()))?;

    info!(
        "Assessment scored for {}: goal \"{}\"",
        student.name, career_goal
    );

    let narrative_request = NarrativeRequest {
        student: student.clone(),
        career_goal: career_goal.clone(),
        trait_scores,
    };
    let sections = state.narrative.generate_sections(&narrative_request).await?;

    if sections.is_empty() {
        return Err(AppError::Processing(
            "Failed to generate report sections".to_string(),
        ));
    }

    let report = build_report_data(&student.name, &career_goal, sections)?;

    let file_name = format!("{}_Career_Report.pdf", student.name.replace(' ', "_"));
    let pdf = state.renderer.render(&report)?;

    let upload = state
        .store
        .upload(&file_name, pdf, "application/pdf")
        .await?;

    info!("Report uploaded: {} ({})", file_name, upload.file_id);

    Ok(Json(SubmitAssessmentResponse {
        message: "Report generated successfully".to_string(),
        report_url: upload.url,
        file_id: upload.file_id,
        file_name,
        student_name: student.name,
        career_goal,
    }))
}

/// GET /api/download-report/:filename
///
/// The authorization check is presence-only (bearer format) and runs before
/// any storage access.
pub async fn handle_download_report(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    require_bearer(&headers)?;

    if filename.trim().is_empty() || filename.contains("..") || filename.contains('/') {
        return Err(AppError::Validation("Invalid file path".to_string()));
    }

    let file = state
        .store
        .download(&filename)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    let response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        file.content,
    );

    Ok(response.into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Validation helpers
// ────────────────────────────────────────────────────────────────────────────

/// Enforces the `answers` contract: present and a mapping.
fn validate_answers(answers: Option<&Value>) -> Result<&AnswerSet, AppError> {
    match answers {
        None | Some(Value::Null) => {
            Err(AppError::Validation("Missing answers data".to_string()))
        }
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(AppError::Validation("Invalid answers format".to_string())),
    }
}

/// Presence-only bearer check; the token itself is not verified.
fn require_bearer(headers: &HeaderMap) -> Result<(), AppError> {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("Bearer "))
        .unwrap_or(false);

    if authorized {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}
