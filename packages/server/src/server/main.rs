// Main entry point for the website generator API server

use anyhow::{Context, Result};
use server_core::server::app::build_app;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting website generator API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    if config.openai_api_key.is_none() {
        tracing::info!("OPENAI_API_KEY not set, generation runs in demo mode");
    }

    // Build application
    let app = build_app(config.openai_api_key);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
