//! Preview routes.
//!
//! GET /preview/:id           - standalone document for iframe/browser display
//! GET /preview/:id/code      - view-source document (escaped HTML + CSS)
//! GET /preview/:id/download  - same document as an attachment
//!
//! These routes speak HTML, not JSON: a missing id renders a minimal
//! not-found page rather than an API error.

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use uuid::Uuid;

use crate::server::app::AppState;
use crate::website::preview::{
    download_filename, render_document, render_error, render_not_found, render_source_view,
};
use crate::website::Website;

async fn lookup(state: &AppState, id: &str) -> Option<Website> {
    let id = Uuid::parse_str(id).ok()?;
    state.store.get(id).await
}

fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found())).into_response()
}

/// Render a stored website as a standalone HTML document.
pub async fn preview_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match lookup(&state, &id).await {
        Some(website) => Html(render_document(&website)).into_response(),
        None => not_found_page(),
    }
}

/// Render the raw generated HTML and CSS for the view-code affordance.
pub async fn preview_code_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match lookup(&state, &id).await {
        Some(website) => Html(render_source_view(&website)).into_response(),
        None => not_found_page(),
    }
}

/// Serve the standalone document as a download.
pub async fn preview_download_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(website) = lookup(&state, &id).await else {
        return not_found_page();
    };

    let disposition = format!("attachment; filename=\"{}\"", download_filename(&website));
    let Ok(disposition) = HeaderValue::from_str(&disposition) else {
        // Non-ASCII website names cannot be carried in the header.
        tracing::error!(name = %website.name, "Could not build download header");
        return (StatusCode::INTERNAL_SERVER_ERROR, Html(render_error())).into_response();
    };

    (
        [(header::CONTENT_DISPOSITION, disposition)],
        Html(render_document(&website)),
    )
        .into_response()
}
