pub mod config;
pub mod models;
pub mod pipeline;
pub mod form; // Editable claim form
pub mod records; // In-memory claim records
pub mod report; // Claim report PDF

pub use models::{ClaimField, ClaimFields, ClaimRecord, UploadFormat};
pub use pipeline::extraction::{extract_fields, extract_fields_detailed, FieldExtraction};

use tracing_subscriber::EnvFilter;

/// Initialize tracing. Logs go to stderr so stdout stays free for command output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
