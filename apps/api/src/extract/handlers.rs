//! Axum route handlers for the Upload API.

use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;

use crate::analysis::{normalize, segment, SectionMap};
use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
    pub sections: SectionMap,
}

/// POST /api/v1/upload
///
/// Multipart upload (`file` part). Extracts text from the document, runs the
/// normalization and segmentation stages, and returns both the cleaned text
/// and the section map for the editor.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let filename = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        let kind = DocumentKind::detect(content_type.as_deref(), filename.as_deref())
            .ok_or_else(|| {
                AppError::Validation(
                    "unsupported document type; upload PDF, Word, or plain text".to_string(),
                )
            })?;

        // PDF parsing is CPU-bound; keep it off the async runtime threads.
        let text = tokio::task::spawn_blocking(move || extract_text(kind, &data))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

        let text = normalize(&text);
        let sections = segment(&text);
        return Ok(Json(UploadResponse { text, sections }));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}
