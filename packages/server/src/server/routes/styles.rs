//! Style preset listing for the client-side style picker.

use axum::Json;

use crate::website::style::{StylePreset, StyleTemplate};

/// GET /api/styles - the fixed template table (colors, font, layout).
pub async fn list_styles_handler() -> Json<Vec<StylePreset>> {
    Json(
        StyleTemplate::ALL
            .iter()
            .map(|template| template.preset())
            .collect(),
    )
}
