//! Document upload endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::UploadResponse;

/// POST /api/upload - Upload and process one PDF
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let start = Instant::now();
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::invalid_input(format!("failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        if filename.is_empty() {
            return Err(Error::invalid_input("no file selected"));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::invalid_input(format!("failed to read file: {}", e)))?;

        upload = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| Error::invalid_input("no file uploaded"))?;
    tracing::info!("Processing upload: {} ({} bytes)", filename, data.len());

    let report = state.pipeline().process(&filename, &data).await?;

    tracing::info!(
        "Upload '{}' completed in {:.1}s",
        filename,
        start.elapsed().as_secs_f64()
    );

    Ok(Json(UploadResponse::from(report)))
}
