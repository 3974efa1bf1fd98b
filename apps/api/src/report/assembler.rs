//! Report assembly — pure transformation of scored assessment output into
//! the renderer-ready document structure. No I/O.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::AppError;

/// One topic of generated guidance narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub topic: String,
    pub narrative: String,
}

/// The finalized structure handed to PDF rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub student_name: String,
    pub career_goal: String,
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("Report must contain at least one narrative section")]
    EmptySections,
}

impl From<AssemblyError> for AppError {
    fn from(err: AssemblyError) -> Self {
        AppError::Processing(format!("Failed to assemble report: {err}"))
    }
}

/// Combines student identity, goal, and narrative sections into `ReportData`.
///
/// Sections with a blank topic or narrative are dropped; if nothing usable
/// remains the assembly fails rather than producing an empty report.
pub fn build_report_data(
    student_name: &str,
    career_goal: &str,
    sections: Vec<ReportSection>,
) -> Result<ReportData, AssemblyError> {
    let sections: Vec<ReportSection> = sections
        .into_iter()
        .filter(|s| !s.topic.trim().is_empty() && !s.narrative.trim().is_empty())
        .collect();

    if sections.is_empty() {
        return Err(AssemblyError::EmptySections);
    }

    Ok(ReportData {
        student_name: student_name.to_string(),
        career_goal: career_goal.to_string(),
        sections,
    })
}
