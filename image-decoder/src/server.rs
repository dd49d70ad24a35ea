use std::sync::Arc;

use aide::openapi::{Info, OpenApi};
use axum::{extract::DefaultBodyLimit, Extension, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{routes, state::AppState, types::Environment};

/// Builds the application router with `state` attached to every route
///
/// Request bodies are not size limited.
pub fn router(state: AppState) -> Router {
    let mut openapi = OpenApi {
        info: Info {
            title: "Image Decoder".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Info::default()
        },
        ..OpenApi::default()
    };

    routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(Arc::new(openapi)))
        .layer(Extension(state.environment))
        .layer(Extension(state.image_storage))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}

/// Starts the server with the given state
///
/// # Errors
///
/// Returns an error if the port is invalid or the server fails to bind
pub async fn start(state: AppState) -> anyhow::Result<()> {
    let addr = Environment::bind_addr()?;
    let image_dir = state.image_storage.base_dir().display().to_string();

    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 Base64 Image Decoder started on http://{addr}");
    info!("📂 Saving images to {image_dir}");
    info!("📝 Send POST requests to /decode-image with JSON: {{\"base64_string\": \"<base64>\"}}");

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
