use std::path::Path;

use crate::models::UploadFormat;

use super::format::{
    check_upload_size, detect_upload_format, is_accepted_extension, sanitize_filename,
};
use super::ImportError;

/// A single uploaded document, held in memory for OCR.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: sanitize_filename(file_name),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let size = std::fs::metadata(path)?.len();
        check_upload_size(size)?;
        let bytes = std::fs::read(path)?;
        Ok(Self::new(&path.to_string_lossy(), bytes))
    }

    /// Validate size and detect the format from magic bytes.
    ///
    /// The content decides the format; a file name without an accepted
    /// extension is only logged.
    pub fn detect_format(&self) -> Result<UploadFormat, ImportError> {
        check_upload_size(self.bytes.len() as u64)?;
        let format = detect_upload_format(&self.bytes)
            .ok_or_else(|| ImportError::UnsupportedFormat(self.file_name.clone()))?;

        if !is_accepted_extension(&self.file_name) {
            tracing::warn!(
                file_name = %self.file_name,
                detected = format.mime_type(),
                "Upload extension not accepted, using detected content type"
            );
        }
        Ok(format)
    }
}
