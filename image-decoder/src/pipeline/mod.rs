//! Image ingest pipeline: base64 string in, file on disk out
mod error;

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::image_storage::{ImageStorage, StoredImage};

pub use error::{PipelineError, PipelineResult};

/// Prefix that marks a data URL carrying an image
pub const DATA_URL_PREFIX: &str = "data:image";

/// Standard alphabet, padding required, stray trailing bits ignored
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Strips a `data:image<metadata>,` prefix, returning only the payload
///
/// Strings without the prefix are returned unchanged. Only the first comma
/// is used as the split point.
///
/// # Errors
///
/// Returns `PipelineError::MalformedDataUrl` if the prefix is present but no
/// comma follows it
pub fn strip_data_url_prefix(encoded: &str) -> PipelineResult<&str> {
    if !encoded.starts_with(DATA_URL_PREFIX) {
        return Ok(encoded);
    }

    encoded
        .split_once(',')
        .map(|(_, payload)| payload)
        .ok_or(PipelineError::MalformedDataUrl)
}

/// Decodes standard base64, discarding characters outside the alphabet
///
/// Line breaks, spaces and other stray characters are dropped before
/// decoding; the remaining input must still be correctly padded.
///
/// # Errors
///
/// Returns `PipelineError::Decode` if what remains is not valid base64
pub fn decode_base64(payload: &str) -> PipelineResult<Vec<u8>> {
    let filtered: String = payload
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect();

    Ok(LENIENT_STANDARD.decode(filtered)?)
}

/// Decodes `encoded` and writes it to `storage` under a name derived from
/// `received_at`
///
/// # Errors
///
/// - `PipelineError::MalformedDataUrl` - data URL without a payload separator
/// - `PipelineError::Decode` - payload is not valid base64
/// - `PipelineError::Io` - the file could not be written
pub async fn ingest(
    storage: &ImageStorage,
    encoded: &str,
    received_at: DateTime<Local>,
) -> PipelineResult<StoredImage> {
    let payload = strip_data_url_prefix(encoded)?;
    let bytes = decode_base64(payload)?;
    debug!("Decoded {} bytes", bytes.len());

    let stored = storage.save(&bytes, received_at).await?;

    info!("✅ Image saved as {}", stored.filename);
    info!("📁 Full path: {}", stored.filepath.display());

    Ok(stored)
}
