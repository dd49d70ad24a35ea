//! Application state management

use std::sync::Arc;

use crate::{image_storage::ImageStorage, types::Environment};

/// Server configuration shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Deployment environment the server runs in
    pub environment: Environment,
    /// Local storage decoded images are written to
    pub image_storage: Arc<ImageStorage>,
}

impl AppState {
    /// Builds the state for `environment`, storing images in its storage directory
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be resolved
    pub fn from_environment(environment: Environment) -> std::io::Result<Self> {
        let image_storage = ImageStorage::new(environment.storage_dir()?)?;

        Ok(Self {
            environment,
            image_storage: Arc::new(image_storage),
        })
    }
}
