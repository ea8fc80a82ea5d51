use axum::Json;

use crate::render::catalog::{templates, ColorScheme, TemplateInfo, COLORS};

/// GET /api/templates
pub async fn templates_handler() -> Json<Vec<TemplateInfo>> {
    Json(templates())
}

/// GET /api/colors
pub async fn colors_handler() -> Json<Vec<ColorScheme>> {
    Json(COLORS.to_vec())
}
