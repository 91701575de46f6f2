use super::types::PageExtraction;

/// Confidence thresholds used when reviewing OCR output
pub mod thresholds {
    /// Below this: the page probably needs manual entry.
    pub const LOW: f32 = 0.50;

    /// Below this: some uncertainty. Reviewer should double-check the form.
    pub const MODERATE: f32 = 0.70;
}

/// Overall confidence for an upload, weighted by text length per page.
pub fn compute_overall_confidence(pages: &[PageExtraction]) -> f32 {
    let total_chars: usize = pages.iter().map(|p| p.text.len()).sum();
    if total_chars == 0 {
        return 0.0;
    }

    let weighted_sum: f32 = pages
        .iter()
        .map(|p| p.confidence * p.text.len() as f32)
        .sum();

    weighted_sum / total_chars as f32
}

/// Page numbers whose OCR confidence falls below `threshold`.
pub fn low_confidence_pages(pages: &[PageExtraction], threshold: f32) -> Vec<usize> {
    pages
        .iter()
        .filter(|p| p.confidence < threshold)
        .map(|p| p.page_number)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_page(page_number: usize, text: &str, confidence: f32) -> PageExtraction {
        PageExtraction {
            page_number,
            text: text.to_string(),
            confidence,
        }
    }

    #[test]
    fn weighted_by_text_length() {
        let pages = vec![
            make_page(1, &"Claim ID: FRA-2024-00099 ".repeat(10), 0.85),
            make_page(2, "Blurry", 0.30),
        ];
        let conf = compute_overall_confidence(&pages);
        // Long page dominates: should be close to 0.85
        assert!(conf > 0.80, "Expected > 0.80, got {conf}");
    }

    #[test]
    fn no_pages_returns_zero() {
        assert_eq!(compute_overall_confidence(&[]), 0.0);
    }

    #[test]
    fn all_empty_text_returns_zero() {
        let pages = vec![make_page(1, "", 0.9), make_page(2, "", 0.9)];
        assert_eq!(compute_overall_confidence(&pages), 0.0);
    }

    #[test]
    fn flags_pages_below_threshold() {
        let pages = vec![
            make_page(1, "clear", 0.90),
            make_page(2, "smudged", 0.40),
            make_page(3, "faded", 0.65),
        ];
        assert_eq!(low_confidence_pages(&pages, thresholds::MODERATE), vec![2, 3]);
        assert_eq!(low_confidence_pages(&pages, thresholds::LOW), vec![2]);
    }
}
