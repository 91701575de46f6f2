pub mod import;
pub mod extraction;
pub mod processor; // Upload → OCR → claim fields
