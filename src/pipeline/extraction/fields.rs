//! Claim field extraction from OCR text.
//!
//! Each claim field has one case-insensitive label pattern. Patterns are
//! applied independently to the whole text and the leftmost match wins.
//! Fields without a usable match get their fallback default, so the result
//! is always a complete `ClaimFields`.
//!
//! Known limitation: name/place captures run over letters and spaces until
//! the end of the line, so two labels on one line with no punctuation
//! between them bleed together ("Name John Village Amgaon" reads the name as
//! "John Village Amgaon"). Whitespace after a separator also spans line
//! breaks, so a label with nothing after it reads the next line instead:
//! "Name: \nName: Ravi" gives the name "Name".

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::{ClaimField, ClaimFields};

/// A compiled label pattern. Capture group 1 holds the value.
struct FieldRule {
    field: ClaimField,
    regex: Regex,
}

impl FieldRule {
    /// First match in `text`, trimmed. Empty captures count as no match.
    fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let value = self.regex.captures(text)?.get(1)?.as_str().trim();
        (!value.is_empty()).then_some(value)
    }
}

static FIELD_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        rule(ClaimField::ClaimId, r"(?i)Claim\s*ID\s*[:\-]?\s*(\S+)"),
        rule(ClaimField::ClaimantName, r"(?i)Name\s*[:\-]?\s*([A-Za-z \t]+)"),
        rule(ClaimField::Village, r"(?i)Village\s*[:\-]?\s*([A-Za-z \t]+)"),
        rule(ClaimField::District, r"(?i)District\s*[:\-]?\s*([A-Za-z \t]+)"),
        rule(ClaimField::State, r"(?i)State\s*[:\-]?\s*([A-Za-z \t]+)"),
        rule(ClaimField::ClaimType, r"(?i)Claim\s*Type\s*[:\-]?\s*(\S+)"),
    ]
});

fn rule(field: ClaimField, regex_str: &str) -> FieldRule {
    FieldRule {
        field,
        regex: Regex::new(regex_str).expect("Invalid claim field regex pattern"),
    }
}

/// Extraction output plus which fields came from the document.
#[derive(Debug, Clone, Serialize)]
pub struct FieldExtraction {
    pub fields: ClaimFields,
    /// Fields read from the text. Everything else holds its fallback.
    pub matched: Vec<ClaimField>,
}

/// Extract the six claim fields from raw OCR text. Never fails.
pub fn extract_fields(raw_text: &str) -> ClaimFields {
    extract_fields_detailed(raw_text).fields
}

/// Like [`extract_fields`], also reporting which fields matched.
pub fn extract_fields_detailed(raw_text: &str) -> FieldExtraction {
    let mut fields = ClaimFields::fallbacks();
    let mut matched = Vec::with_capacity(FIELD_RULES.len());

    for rule in FIELD_RULES.iter() {
        if let Some(value) = rule.capture(raw_text) {
            fields.set(rule.field, value);
            matched.push(rule.field);
        }
    }

    tracing::debug!(
        matched = matched.len(),
        text_length = raw_text.len(),
        "Claim fields extracted"
    );

    FieldExtraction { fields, matched }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_labelled_lines() {
        let fields = extract_fields("Claim ID: FRA-2024-00099\nName: Meena Bai\nVillage: Rampur");
        assert_eq!(
            fields,
            ClaimFields {
                claim_id: "FRA-2024-00099".into(),
                claimant_name: "Meena Bai".into(),
                village: "Rampur".into(),
                district: "N/A".into(),
                state: "N/A".into(),
                claim_type: "Individual".into(),
            }
        );
    }

    #[test]
    fn empty_text_yields_fallbacks() {
        assert_eq!(extract_fields(""), ClaimFields::fallbacks());
    }

    #[test]
    fn unlabelled_text_yields_fallbacks() {
        let text = "Forest Rights Act, 2006\nForm A\n12/03/2024\nSigned by the Gram Sabha";
        assert_eq!(extract_fields(text), ClaimFields::fallbacks());
    }

    #[test]
    fn claim_type_with_dash() {
        let fields = extract_fields("claim type- Community");
        assert_eq!(fields.claim_type, "Community");

        let mut expected = ClaimFields::fallbacks();
        expected.claim_type = "Community".into();
        assert_eq!(fields, expected);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let fields = extract_fields("District:   Chandrapur  \nState: Maharashtra");
        assert_eq!(fields.district, "Chandrapur");
        assert_eq!(fields.state, "Maharashtra");
    }

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(extract_fields("VILLAGE: Amgaon").village, "Amgaon");
        assert_eq!(extract_fields("village - Amgaon").village, "Amgaon");
        assert_eq!(extract_fields("Village:Amgaon").village, "Amgaon");
    }

    #[test]
    fn claim_id_found_inside_prose() {
        let text = "Scanned on 12/03/2024. Claim ID: FRA-2023-00412 submitted by the Gram Sabha.";
        let fields = extract_fields(text);
        assert_eq!(fields.claim_id, "FRA-2023-00412");
        assert_eq!(fields.claimant_name, "Unknown Claimant");
    }

    #[test]
    fn claim_id_without_separator_or_space() {
        assert_eq!(extract_fields("ClaimID FRA-7").claim_id, "FRA-7");
        assert_eq!(extract_fields("claim id-FRA-8").claim_id, "FRA-8");
    }

    #[test]
    fn value_may_sit_on_next_line() {
        let fields = extract_fields("Claim ID:\nFRA-2024-00007\nState:\nOdisha");
        assert_eq!(fields.claim_id, "FRA-2024-00007");
        assert_eq!(fields.state, "Odisha");
    }

    #[test]
    fn first_occurrence_wins() {
        let fields = extract_fields("Village: Rampur\nVillage: Amgaon");
        assert_eq!(fields.village, "Rampur");
    }

    #[test]
    fn letter_capture_stops_at_digit() {
        let fields = extract_fields("Name: Ravi Kumar 2nd son");
        assert_eq!(fields.claimant_name, "Ravi Kumar");
    }

    #[test]
    fn letter_capture_stops_at_carriage_return() {
        let fields = extract_fields("Village: Rampur\r\nDistrict: Gadchiroli\r\n");
        assert_eq!(fields.village, "Rampur");
        assert_eq!(fields.district, "Gadchiroli");
    }

    #[test]
    fn numeric_only_name_falls_back() {
        let fields = extract_fields("Name: 12345");
        assert_eq!(fields.claimant_name, "Unknown Claimant");
    }

    #[test]
    fn name_label_inside_claimant_name() {
        let fields = extract_fields("Claimant Name: Sita Devi\nClaim Type: Community");
        assert_eq!(fields.claimant_name, "Sita Devi");
        assert_eq!(fields.claim_type, "Community");
        assert_eq!(fields.claim_id, "FRA-XXXX-00000");
    }

    #[test]
    fn labels_on_one_line_bleed_together() {
        // Documented limitation: the name capture swallows the next label.
        let fields = extract_fields("Name John Village Amgaon");
        assert_eq!(fields.claimant_name, "John Village Amgaon");
        assert_eq!(fields.village, "Amgaon");
    }

    #[test]
    fn empty_label_reads_next_line() {
        let fields = extract_fields("Name: \nName: Ravi");
        assert_eq!(fields.claimant_name, "Name");
    }

    #[test]
    fn fields_do_not_consume_each_other() {
        let text = "State: Odisha\nDistrict: Koraput\nVillage: Kunduli\nName: Laxmi Majhi\n\
                    Claim Type: Individual\nClaim ID: FRA-OD-2024-311";
        let fields = extract_fields(text);
        assert_eq!(fields.state, "Odisha");
        assert_eq!(fields.district, "Koraput");
        assert_eq!(fields.village, "Kunduli");
        assert_eq!(fields.claimant_name, "Laxmi Majhi");
        assert_eq!(fields.claim_type, "Individual");
        assert_eq!(fields.claim_id, "FRA-OD-2024-311");
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "Claim ID: FRA-1\nName: Meena Bai\nDistrict - Nashik";
        assert_eq!(extract_fields(text), extract_fields(text));
    }

    #[test]
    fn detailed_reports_matched_fields() {
        let result = extract_fields_detailed("Claim ID: FRA-2024-00099\nName: Meena Bai\nVillage: Rampur");
        assert_eq!(
            result.matched,
            vec![ClaimField::ClaimId, ClaimField::ClaimantName, ClaimField::Village]
        );
        assert!(extract_fields_detailed("").matched.is_empty());
    }
}
