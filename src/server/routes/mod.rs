//! API routes

pub mod ask;
pub mod context;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Upload - with a larger body limit for multipart uploads
        .route(
            "/upload",
            post(upload::upload_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Question answering
        .route("/ask", post(ask::ask_question))
        // Context management
        .route("/context", get(context::context_status))
        .route("/context", delete(context::clear_context))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "paperlens",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Research-paper summarization and document-grounded Q&A",
        "endpoints": {
            "POST /api/upload": "Upload a PDF; returns summary, page count, and text length",
            "POST /api/ask": "Ask a question against the most recent upload",
            "GET /api/context": "Inspect the loaded document context",
            "DELETE /api/context": "Clear the loaded document context"
        }
    }))
}
