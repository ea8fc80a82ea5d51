//! Axum route handlers for the Resume API.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::ValidatedJson;
use crate::models::resume::{
    CreateResumeRequest, ResumeDocument, ResumeRecord, UpdateResumeRequest, DEFAULT_COLOR,
    DEFAULT_TEMPLATE,
};
use crate::render::render_resume;
use crate::resumes::service;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratePdfRequest {
    #[serde(default)]
    pub html: Option<String>,
}

/// Live preview of a possibly incomplete document; not schema-validated.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub data: ResumeDocument,
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation("Invalid resume ID".to_string()))
}

fn not_found() -> AppError {
    AppError::NotFound("Resume not found".to_string())
}

fn pdf_response(pdf: Bytes, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        pdf,
    )
        .into_response()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    let record = service::create_resume(state.store.as_ref(), req).await;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/resumes?userId=N
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Json<Vec<ResumeRecord>> {
    Json(service::list_resumes(state.store.as_ref(), params.user_id).await)
}

/// GET /api/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeRecord>, AppError> {
    let id = parse_id(&id)?;
    service::get_resume(state.store.as_ref(), id)
        .await
        .map(Json)
        .ok_or_else(not_found)
}

/// PUT /api/resumes/:id
///
/// Partial update; `data` is validated when present.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<UpdateResumeRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    let id = parse_id(&id)?;
    service::update_resume(state.store.as_ref(), id, patch)
        .await
        .map(Json)
        .ok_or_else(not_found)
}

/// DELETE /api/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    if service::delete_resume(state.store.as_ref(), id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found())
    }
}

/// POST /api/resumes/generate-pdf
///
/// Prints a client-rendered HTML snapshot. A single attempt; no retries.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePdfRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let html = req
        .html
        .filter(|h| !h.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Resume HTML content is required".to_string()))?;

    info!("Generating PDF from {} bytes of markup", html.len());
    let pdf = state.pdf.render(&html).await?;
    Ok(pdf_response(pdf, "resume.pdf"))
}

/// GET /api/resumes/:id/pdf
///
/// Renders the stored document server-side with its own template and color.
pub async fn handle_resume_pdf(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let record = service::get_resume(state.store.as_ref(), id)
        .await
        .ok_or_else(not_found)?;

    let html = render_resume(&record.data, &record.template, &record.color)?;
    let pdf = state.pdf.render(&html).await?;
    Ok(pdf_response(pdf, &record.data.personal_info.pdf_filename()))
}

/// POST /api/resumes/preview
pub async fn handle_preview(
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Html<String>, AppError> {
    let Json(req) = payload?;
    let template = req.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    let color = req.color.as_deref().unwrap_or(DEFAULT_COLOR);
    Ok(Html(render_resume(&req.data, template, color)?))
}
