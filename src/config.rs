use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "FRA Intake";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tesseract-style language code handed to the OCR engine by default
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

/// PDF pages are rasterized at twice their natural size before OCR
pub const PDF_RENDER_SCALE: f32 = 2.0;

/// Log filter used when RUST_LOG is not set
pub fn default_log_filter() -> &'static str {
    "info,fra_intake=debug"
}

/// Get the application data directory
/// ~/FRA-Intake/ on all platforms; falls back to the working directory
/// when no home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("FRA-Intake")
}

/// Get the directory claim report PDFs are exported to
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}
