//! Base64 image decoding endpoint

use std::sync::Arc;

use axum::{Extension, Json};
use chrono::Local;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{
    image_storage::{ImageStorage, StoredImage},
    pipeline::{self, PipelineError},
    types::{AppError, ValidatedJson},
};

/// Request body for `POST /decode-image`
#[derive(Debug, Deserialize, Serialize, Validate, JsonSchema)]
pub struct DecodeImageRequest {
    /// Base64-encoded image, optionally as a `data:image/...;base64,` URL
    #[validate(required)]
    pub base64_string: Option<String>,
}

/// Response body for a stored image
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DecodeImageResponse {
    /// Always `true`; failures use the error body instead
    pub success: bool,
    /// Generated filename, `ocr_image_<YYYYMMDD_HHMMSS>.jpg`
    pub filename: String,
    /// Absolute path of the written file
    pub filepath: String,
    /// Human-readable confirmation
    pub message: String,
}

impl From<StoredImage> for DecodeImageResponse {
    fn from(stored: StoredImage) -> Self {
        Self {
            success: true,
            message: format!("Image saved as {}", stored.filename),
            filepath: stored.filepath.to_string_lossy().into_owned(),
            filename: stored.filename,
        }
    }
}

/// Decodes a base64 image and saves it to disk
///
/// 1. Strips a `data:image...,` prefix if present
/// 2. Decodes the remaining base64 payload
/// 3. Writes the bytes to `ocr_image_<timestamp>.jpg` in the storage directory
///
/// # Errors
///
/// - `PipelineError::MissingField` - no `base64_string` in the body (400)
/// - `PipelineError::MalformedDataUrl` - data URL without a `,` (500)
/// - `PipelineError::Decode` - invalid base64 payload (500)
/// - `PipelineError::Io` - the file could not be written (500)
#[instrument(skip(image_storage, payload))]
pub async fn decode_image(
    Extension(image_storage): Extension<Arc<ImageStorage>>,
    ValidatedJson(payload): ValidatedJson<DecodeImageRequest>,
) -> Result<Json<DecodeImageResponse>, AppError> {
    let encoded = payload
        .base64_string
        .ok_or(PipelineError::MissingField)?;

    tracing::debug!("Received {} base64 characters", encoded.len());

    let stored = pipeline::ingest(&image_storage, &encoded, Local::now()).await?;

    Ok(Json(stored.into()))
}
