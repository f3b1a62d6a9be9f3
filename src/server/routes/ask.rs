//! Question-answering endpoint

use axum::{extract::State, Json};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{AskRequest, AskResponse};

/// POST /api/ask - Answer a question against the loaded document
pub async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let start = Instant::now();

    let question = request.question.trim();
    if question.is_empty() {
        return Err(Error::invalid_input("no question provided"));
    }

    let context = state.context().current().ok_or_else(|| {
        Error::NoContext("no document context available, please upload a PDF first".to_string())
    })?;

    tracing::info!("Question: \"{}\"", question);

    let answer = state.answerer().answer(question, &context.text).await?;

    tracing::info!("Question answered in {:.1}s", start.elapsed().as_secs_f64());

    Ok(Json(AskResponse { answer }))
}
