use std::sync::Arc;

use aide::axum::IntoApiResponse;
use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::Serialize;

use crate::image_storage::ImageStorage;

#[derive(Debug, Serialize, JsonSchema)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when images cannot currently be stored
    status: &'static str,
    /// Current version of the application
    semver: &'static str,
    /// Commit hash of the current build (if available)
    rev: Option<&'static str>,
    /// Whether the storage directory exists and is writable
    storage_available: bool,
}

/// Health check endpoint
///
/// Reports version information and whether the image storage directory
/// is usable. Always answers 200.
pub async fn handler(
    Extension(image_storage): Extension<Arc<ImageStorage>>,
) -> impl IntoApiResponse {
    let storage_available = tokio::fs::metadata(image_storage.base_dir())
        .await
        .is_ok_and(|meta| meta.is_dir() && !meta.permissions().readonly());

    if !storage_available {
        tracing::warn!(
            "Storage directory {} is not writable",
            image_storage.base_dir().display()
        );
    }

    Json(HealthResponse {
        status: if storage_available { "ok" } else { "degraded" },
        semver: env!("CARGO_PKG_VERSION"),
        rev: option_env!("GIT_REV"),
        storage_available,
    })
}
