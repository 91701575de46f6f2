use std::path::Path;

use crate::models::UploadFormat;

use super::ImportError;

pub const MAX_UPLOAD_SIZE: u64 = 100 * 1024 * 1024; // 100MB

/// Detect upload format from magic bytes (NOT file extensions).
/// Returns `None` for anything the intake cannot OCR.
pub fn detect_upload_format(bytes: &[u8]) -> Option<UploadFormat> {
    match bytes {
        // PDF: starts with %PDF
        [0x25, 0x50, 0x44, 0x46, ..] => Some(UploadFormat::Pdf),
        // JPEG: starts with FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Some(UploadFormat::Jpeg),
        // PNG: starts with 89 50 4E 47
        [0x89, 0x50, 0x4E, 0x47, ..] => Some(UploadFormat::Png),
        _ => None,
    }
}

/// Whether the file name carries one of the accepted upload extensions.
pub fn is_accepted_extension(file_name: &str) -> bool {
    let Some(ext) = Path::new(file_name).extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    [UploadFormat::Pdf, UploadFormat::Jpeg, UploadFormat::Png]
        .iter()
        .any(|format| format.extensions().contains(&ext.as_str()))
}

/// Reject empty and oversized uploads before any OCR work.
pub fn check_upload_size(size: u64) -> Result<(), ImportError> {
    if size == 0 {
        return Err(ImportError::EmptyUpload);
    }
    if size > MAX_UPLOAD_SIZE {
        return Err(ImportError::FileTooLarge {
            size_mb: size as f64 / (1024.0 * 1024.0),
            max_mb: MAX_UPLOAD_SIZE / (1024 * 1024),
        });
    }
    Ok(())
}

/// Sanitize a filename: strip path components, limit length
pub fn sanitize_filename(original: &str) -> String {
    let name = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document");

    let clean: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | '\0'))
        .take(255)
        .collect();

    if clean.is_empty() {
        "document".to_string()
    } else {
        clean
    }
}
