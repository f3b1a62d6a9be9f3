//! Context inspection and clearing

use axum::{extract::State, http::StatusCode, Json};

use crate::server::state::AppState;
use crate::types::ContextStatus;

/// GET /api/context - Report the loaded document context
pub async fn context_status(State(state): State<AppState>) -> Json<ContextStatus> {
    let status = match state.context().current() {
        Some(ctx) => ContextStatus {
            loaded: true,
            text_length: Some(ctx.text.chars().count()),
            source_filename: Some(ctx.source_filename),
            loaded_at: Some(ctx.loaded_at),
        },
        None => ContextStatus::empty(),
    };
    Json(status)
}

/// DELETE /api/context - Clear the loaded document context
pub async fn clear_context(State(state): State<AppState>) -> StatusCode {
    state.context().clear();
    tracing::info!("Document context cleared");
    StatusCode::NO_CONTENT
}
