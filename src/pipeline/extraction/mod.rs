pub mod types;
pub mod confidence;
pub mod fields;
pub mod ocr;

pub use types::*;
pub use confidence::*;
pub use fields::*;
pub use ocr::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),

    #[error("PDF page rendering failed: {0}")]
    PdfRender(String),
}
