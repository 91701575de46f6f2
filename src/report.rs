//! FRA claim report PDF.
//!
//! One A4 page: a title line followed by "Label: value" for each claim
//! field in record order. Generation via `printpdf`.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::*;
use thiserror::Error;

use crate::form::ClaimForm;
use crate::models::ClaimFields;

pub const REPORT_TITLE: &str = "FRA Claim Report";

/// File name used when the form has no claim id.
pub const DEFAULT_REPORT_FILE: &str = "FRA_Report.pdf";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Form is empty, fill in a claim id or claimant name to generate a PDF")]
    EmptyForm,

    #[error("PDF generation error: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generates the claim report. Returns PDF bytes.
pub fn generate_claim_report(fields: &ClaimFields) -> Result<Vec<u8>, ReportError> {
    let (doc, page1, layer1) = PdfDocument::new(REPORT_TITLE, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;

    // 14mm left margin, title 20mm below the top edge
    let x = Mm(14.0);
    let mut y = Mm(297.0 - 20.0);

    layer.use_text(REPORT_TITLE, 14.0, x, y, &font);
    y -= Mm(10.0);

    for line in report_lines(fields) {
        layer.use_text(line, 14.0, x, y, &font);
        y -= Mm(10.0);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::Pdf(format!("buffer error: {e}")))
}

/// "Label: value" for each field, in record order.
pub fn report_lines(fields: &ClaimFields) -> Vec<String> {
    fields
        .entries()
        .iter()
        .map(|(field, value)| format!("{}: {}", field.label(), value))
        .collect()
}

/// "{claimId}.pdf", or the default name when the claim id is blank.
pub fn report_file_name(fields: &ClaimFields) -> String {
    let id: String = fields
        .claim_id
        .trim()
        .chars()
        .filter(|c| *c != '\0')
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();

    if id.is_empty() {
        DEFAULT_REPORT_FILE.to_string()
    } else {
        format!("{id}.pdf")
    }
}

/// Writes the form's claim report into `dir`. Returns the file path.
pub fn export_report(form: &ClaimForm, dir: &Path) -> Result<PathBuf, ReportError> {
    if form.is_empty() {
        return Err(ReportError::EmptyForm);
    }

    let pdf_bytes = generate_claim_report(form.fields())?;
    std::fs::create_dir_all(dir)?;

    let path = dir.join(report_file_name(form.fields()));
    std::fs::write(&path, &pdf_bytes)?;

    tracing::info!(path = %path.display(), size = pdf_bytes.len(), "Claim report exported");
    Ok(path)
}
