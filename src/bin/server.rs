//! Summarization service binary
//!
//! Run with: cargo run --bin paperlens-server [config.toml]

use paperlens::server::state::AppState;
use paperlens::{config::AppConfig, server::ApiServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paperlens=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Config file path from argv, falling back to defaults
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_file(&path)?,
        None => AppConfig::default(),
    };

    tracing::info!("Configuration loaded");
    tracing::info!("  - Completion API: {}", config.llm.base_url);
    tracing::info!("  - Model: {}", config.llm.model);
    tracing::info!(
        "  - Summary range: {}-{} words",
        config.summary.min_words,
        config.summary.max_words
    );
    tracing::info!("  - Staging dir: {}", config.staging.dir.display());

    let state = AppState::new(config.clone())?;

    // Best-effort reachability check; the service still starts if it fails
    match state.provider().health_check().await {
        Ok(true) => tracing::info!("Completion service is reachable"),
        _ => tracing::warn!(
            "Completion service at {} not reachable; uploads will fail at the summarization stage",
            config.llm.base_url
        ),
    }

    let server = ApiServer::with_state(config, state);

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/upload  - Upload a PDF");
    println!("  POST /api/ask     - Ask a question");
    println!("  GET  /api/context - Inspect the loaded context");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
