use std::sync::Arc;

use crate::config::Config;
use crate::render::ReportRenderer;
use crate::report::narrative::NarrativeProvider;
use crate::storage::FileStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The three I/O-bound pipeline stages live behind trait objects so tests can
/// drive the full router with stub collaborators and no network access.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Generative narrative backend. Production: LLM-backed over `llm_client`.
    pub narrative: Arc<dyn NarrativeProvider>,
    /// PDF renderer for assembled report data.
    pub renderer: Arc<dyn ReportRenderer>,
    /// Object store holding generated reports.
    pub store: Arc<dyn FileStore>,
}
