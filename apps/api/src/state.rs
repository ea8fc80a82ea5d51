use std::sync::Arc;

use crate::config::Config;
use crate::pdf::PdfRenderer;
use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Resume records. Default: process-lifetime `MemoryResumeStore`.
    pub store: Arc<dyn ResumeStore>,
    /// Pluggable PDF backend. Default: `ChromiumPdfRenderer`.
    pub pdf: Arc<dyn PdfRenderer>,
    pub config: Config,
}
