//! Error types for the image ingest pipeline

use thiserror::Error;

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors that can occur while turning a request into a stored image
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The request carried no `base64_string`
    #[error("No base64_string provided")]
    MissingField,

    /// A `data:image` URL without the `,` that separates metadata from payload
    #[error("Malformed data URL: no ',' after the data:image prefix")]
    MalformedDataUrl,

    /// The payload is not valid base64
    #[error("Invalid base64-encoded string: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Writing the decoded bytes failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
