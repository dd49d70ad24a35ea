use axum::{body::Body, http::Request, response::Response, Router};
use image_decoder::{image_storage::ImageStorage, server, state::AppState, types::Environment};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Setup test environment
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Router backed by a storage directory that lives as long as the setup
pub struct TestSetup {
    pub router: Router,
    pub image_storage: Arc<ImageStorage>,
    // Keep the directory alive for the duration of the test
    pub storage_dir: TempDir,
}

impl TestSetup {
    pub fn new() -> Self {
        Self::with_environment(Environment::Development)
    }

    pub fn with_environment(environment: Environment) -> Self {
        setup_test_env();

        let storage_dir = tempfile::tempdir().expect("Failed to create storage dir");
        let image_storage =
            Arc::new(ImageStorage::new(storage_dir.path()).expect("Failed to create storage"));

        let router = server::router(AppState {
            environment,
            image_storage: image_storage.clone(),
        });

        Self {
            router,
            image_storage,
            storage_dir,
        }
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_raw_post_request(route, "application/json", payload.to_string())
            .await
    }

    pub async fn send_raw_post_request(
        &self,
        route: &str,
        content_type: &str,
        body: impl Into<Body>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", content_type)
            .body(body.into())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    /// Number of files currently in the storage directory
    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(self.storage_dir.path())
            .expect("Failed to read storage dir")
            .count()
    }
}
