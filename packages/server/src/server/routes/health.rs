use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    websites: usize,
    demo_mode: bool,
}

/// Health check endpoint
///
/// The store is in-memory so there is nothing external to probe; the
/// response reports the record count and whether generation runs in demo
/// mode (no usable OpenAI key).
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        websites: state.store.count().await,
        demo_mode: state.generator.demo_mode(),
    })
}
