//! Local filesystem storage for decoded images

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Prefix shared by every stored image filename
pub const FILENAME_PREFIX: &str = "ocr_image_";

/// Extension appended to every stored image filename
pub const FILENAME_EXTENSION: &str = "jpg";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Location of an image written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Generated filename, e.g. `ocr_image_20240131_235959.jpg`
    pub filename: String,
    /// Absolute path of the written file
    pub filepath: PathBuf,
}

/// Writes decoded images into a fixed base directory
#[derive(Debug, Clone)]
pub struct ImageStorage {
    base_dir: PathBuf,
}

impl ImageStorage {
    /// Creates a storage rooted at `base_dir`
    ///
    /// Relative paths are resolved against the current working directory so
    /// that reported file paths are always absolute.
    ///
    /// # Errors
    ///
    /// Returns an error if the current working directory cannot be read
    /// while resolving a relative `base_dir`
    pub fn new(base_dir: impl AsRef<Path>) -> io::Result<Self> {
        let base_dir = std::path::absolute(base_dir.as_ref())?;
        Ok(Self { base_dir })
    }

    /// Directory every image is written to
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Filename for an image received at `timestamp`
    ///
    /// Resolution is one second: two images received within the same
    /// second share a filename.
    #[must_use]
    pub fn filename_for(timestamp: DateTime<Local>) -> String {
        format!(
            "{FILENAME_PREFIX}{}.{FILENAME_EXTENSION}",
            timestamp.format(TIMESTAMP_FORMAT)
        )
    }

    /// Full path of `filename` inside the base directory
    #[must_use]
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// Writes `bytes` under the filename derived from `timestamp`
    ///
    /// The file is created or truncated. An existing file with the same
    /// name is overwritten.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while creating or writing the file.
    /// A failed write may leave a truncated file behind.
    pub async fn save(&self, bytes: &[u8], timestamp: DateTime<Local>) -> io::Result<StoredImage> {
        let filename = Self::filename_for(timestamp);
        let filepath = self.path_for(&filename);

        tokio::fs::write(&filepath, bytes).await?;

        Ok(StoredImage { filename, filepath })
    }
}
