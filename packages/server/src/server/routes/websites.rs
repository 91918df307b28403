//! Website generation API.
//!
//! POST /api/websites/generate, GET /api/websites/:id, GET /api/websites

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::server::app::AppState;
use crate::website::store::DEFAULT_LIST_LIMIT;
use crate::website::{GenerationRequest, Website};

/// Generate a website and store the result.
///
/// Validation failures surface as 400 with every violated field; backend
/// failures never surface, the generator degrades to demo mode instead.
pub async fn generate_website_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<Website>, AppError> {
    request.validate()?;

    let outcome = state.generator.generate(&request).await;
    tracing::info!(
        name = %request.name,
        source = ?outcome.source,
        "Website generated"
    );

    let website = state.store.create_website(request, outcome.content).await;
    Ok(Json(website))
}

/// Fetch a single website by id. Malformed ids read as "not found".
pub async fn get_website_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Website>, AppError> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::NotFound)?;
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound)
}

#[derive(Deserialize)]
pub struct ListQuery {
    limit: Option<usize>,
}

/// List recently generated websites, newest first.
pub async fn list_websites_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Website>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    Json(state.store.list_recent(limit).await)
}
