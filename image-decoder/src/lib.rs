//! Base64 image decoder service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Local filesystem storage for decoded images
pub mod image_storage;

/// Base64 decoding pipeline
pub mod pipeline;

/// HTTP routes
pub mod routes;

/// Server bootstrap
pub mod server;

/// Application state
pub mod state;

/// Configuration, errors and extractors
pub mod types;
