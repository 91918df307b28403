//! Application setup and router wiring.

use std::sync::Arc;

use axum::http::{header::CONTENT_TYPE, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    generate_website_handler, get_website_handler, health_handler, list_styles_handler,
    list_websites_handler, preview_code_handler, preview_download_handler, preview_handler,
};
use crate::website::{WebsiteGenerator, WebsiteStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WebsiteStore>,
    pub generator: Arc<WebsiteGenerator>,
}

impl AppState {
    pub fn new(openai_api_key: Option<String>) -> Self {
        Self {
            store: Arc::new(WebsiteStore::new()),
            generator: Arc::new(WebsiteGenerator::new(openai_api_key)),
        }
    }
}

/// Build the Axum application router
pub fn build_app(openai_api_key: Option<String>) -> Router {
    build_app_with_state(AppState::new(openai_api_key))
}

/// Build the router for a given state (tests inject their own).
pub fn build_app_with_state(state: AppState) -> Router {
    // CORS: the preview iframe and the generator UI may live on another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/websites/generate", post(generate_website_handler))
        .route("/api/websites", get(list_websites_handler))
        .route("/api/websites/:id", get(get_website_handler))
        .route("/api/styles", get(list_styles_handler))
        .route("/preview/:id", get(preview_handler))
        .route("/preview/:id/code", get(preview_code_handler))
        .route("/preview/:id/download", get(preview_download_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
