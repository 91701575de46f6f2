//! Claim intake orchestrator.
//!
//! Single entry point that drives an upload through the pipeline:
//! format detection → OCR (page by page for PDFs) → claim field extraction.
//!
//! OCR and PDF rasterizing are injected trait objects, so the whole flow is
//! testable with mock engines.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{ClaimField, ClaimFields, UploadFormat};
use crate::pipeline::extraction::confidence::{
    compute_overall_confidence, low_confidence_pages, thresholds,
};
use crate::pipeline::extraction::fields::extract_fields_detailed;
use crate::pipeline::extraction::types::{OcrEngine, PageExtraction, PdfPageRenderer};
use crate::pipeline::extraction::ExtractionError;
use crate::pipeline::import::{ImportError, Upload};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while processing an upload.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("No PDF renderer configured, cannot OCR {0}")]
    PdfRendererUnavailable(String),
}

// ---------------------------------------------------------------------------
// Events and results
// ---------------------------------------------------------------------------

/// Emitted while an upload is processed, for a progress indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IntakeEvent {
    Started {
        file_name: String,
        format: UploadFormat,
    },
    Progress {
        percent: u8,
        page: usize,
        total: usize,
    },
    Completed {
        matched_fields: usize,
        text_length: usize,
    },
}

/// Everything the intake form needs after OCR finishes.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingOutcome {
    pub file_name: String,
    pub format: UploadFormat,
    pub page_count: usize,
    pub raw_text: String,
    pub fields: ClaimFields,
    /// Fields read from the document; the rest hold fallback defaults.
    pub matched: Vec<ClaimField>,
    pub confidence: f32,
    pub low_confidence_pages: Vec<usize>,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

pub struct ClaimProcessor {
    ocr_engine: Box<dyn OcrEngine + Send + Sync>,
    pdf_renderer: Option<Box<dyn PdfPageRenderer + Send + Sync>>,
    language: String,
    render_scale: f32,
}

impl ClaimProcessor {
    pub fn new(ocr_engine: Box<dyn OcrEngine + Send + Sync>) -> Self {
        Self {
            ocr_engine,
            pdf_renderer: None,
            language: config::DEFAULT_OCR_LANGUAGE.to_string(),
            render_scale: config::PDF_RENDER_SCALE,
        }
    }

    /// Add a PDF page renderer. Without one, PDF uploads are rejected.
    pub fn with_pdf_renderer(mut self, renderer: Box<dyn PdfPageRenderer + Send + Sync>) -> Self {
        self.pdf_renderer = Some(renderer);
        self
    }

    /// Set OCR language(s), e.g. "eng" or "eng+hin"
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn with_render_scale(mut self, scale: f32) -> Self {
        self.render_scale = scale;
        self
    }

    /// OCR an upload and extract claim fields from the recovered text.
    ///
    /// Any OCR or render failure rejects the upload as a whole. Field
    /// extraction itself cannot fail.
    pub fn process(
        &self,
        upload: &Upload,
        progress_fn: Option<&dyn Fn(IntakeEvent)>,
    ) -> Result<ProcessingOutcome, ProcessingError> {
        let format = upload.detect_format()?;

        tracing::info!(
            file_name = %upload.file_name,
            format = format.as_str(),
            mime_type = format.mime_type(),
            size = upload.bytes.len(),
            "Starting claim intake"
        );

        if let Some(progress) = progress_fn {
            progress(IntakeEvent::Started {
                file_name: upload.file_name.clone(),
                format,
            });
        }

        let pages = if format.is_paged() {
            self.ocr_pdf(upload, progress_fn)?
        } else {
            self.ocr_single_image(upload, progress_fn)?
        };

        let raw_text = assemble_text(format, &pages);
        let extraction = extract_fields_detailed(&raw_text);
        let confidence = compute_overall_confidence(&pages);
        let low_pages = low_confidence_pages(&pages, thresholds::LOW);

        if !low_pages.is_empty() {
            tracing::warn!(
                file_name = %upload.file_name,
                pages = ?low_pages,
                "Low OCR confidence, review extracted fields"
            );
        }

        tracing::info!(
            file_name = %upload.file_name,
            pages = pages.len(),
            matched = extraction.matched.len(),
            confidence,
            text_length = raw_text.len(),
            "Claim intake complete"
        );

        if let Some(progress) = progress_fn {
            progress(IntakeEvent::Completed {
                matched_fields: extraction.matched.len(),
                text_length: raw_text.len(),
            });
        }

        Ok(ProcessingOutcome {
            file_name: upload.file_name.clone(),
            format,
            page_count: pages.len(),
            raw_text,
            fields: extraction.fields,
            matched: extraction.matched,
            confidence,
            low_confidence_pages: low_pages,
        })
    }

    fn ocr_single_image(
        &self,
        upload: &Upload,
        progress_fn: Option<&dyn Fn(IntakeEvent)>,
    ) -> Result<Vec<PageExtraction>, ProcessingError> {
        let result = self
            .ocr_engine
            .ocr_image_with_lang(&upload.bytes, &self.language)?;

        if let Some(progress) = progress_fn {
            progress(IntakeEvent::Progress {
                percent: 100,
                page: 1,
                total: 1,
            });
        }

        Ok(vec![PageExtraction {
            page_number: 1,
            text: result.text,
            confidence: result.confidence,
        }])
    }

    /// Render each PDF page and OCR it in order.
    fn ocr_pdf(
        &self,
        upload: &Upload,
        progress_fn: Option<&dyn Fn(IntakeEvent)>,
    ) -> Result<Vec<PageExtraction>, ProcessingError> {
        let renderer = self
            .pdf_renderer
            .as_ref()
            .ok_or_else(|| ProcessingError::PdfRendererUnavailable(upload.file_name.clone()))?;

        let total = renderer.page_count(&upload.bytes)?;
        let mut pages = Vec::with_capacity(total);

        for index in 0..total {
            let image = renderer.render_page(&upload.bytes, index, self.render_scale)?;
            let result = self.ocr_engine.ocr_image_with_lang(&image, &self.language)?;
            let page_number = index + 1;

            tracing::debug!(
                page = page_number,
                total,
                confidence = result.confidence,
                "OCR page complete"
            );

            pages.push(PageExtraction {
                page_number,
                text: result.text,
                confidence: result.confidence,
            });

            if let Some(progress) = progress_fn {
                progress(IntakeEvent::Progress {
                    percent: progress_percent(page_number, total),
                    page: page_number,
                    total,
                });
            }
        }

        Ok(pages)
    }
}

/// PDF pages are each followed by a newline; an image is its OCR text as-is.
fn assemble_text(format: UploadFormat, pages: &[PageExtraction]) -> String {
    if !format.is_paged() {
        return pages.iter().map(|p| p.text.as_str()).collect();
    }
    let mut text = String::new();
    for page in pages {
        text.push_str(&page.text);
        text.push('\n');
    }
    text
}

/// Rounded percentage of pages done.
pub fn progress_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((done * 100 + total / 2) / total).min(100) as u8
}
