//! Whitespace normalization and payment-sentence isolation

use crate::patterns::{PAYMENT_KEYWORD_PATTERN, SEGMENT_BREAK_PATTERN};

/// Document text with every whitespace run collapsed to a single space and
/// no leading or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Normalize raw extracted text. Total over any input; whitespace-only
    /// input yields an empty value.
    pub fn new(raw: &str) -> Self {
        Self(raw.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty normalized text means the document could not be read.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keep only the sentences and lines that mention payment vocabulary.
    pub fn relevant(&self) -> RelevantText {
        RelevantText::from_text(&self.0)
    }
}

impl From<&str> for NormalizedText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Payment-related subset of a document, used only for payment-term extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelevantText(String);

impl RelevantText {
    /// Split on runs of line breaks and periods, keep the segments that match
    /// a payment keyword, and rejoin them with ". ".
    pub fn from_text(text: &str) -> Self {
        let kept: Vec<&str> = SEGMENT_BREAK_PATTERN
            .split(text)
            .filter(|segment| PAYMENT_KEYWORD_PATTERN.is_match(segment))
            .collect();
        Self(kept.join(". "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_collapses_whitespace() {
        let text = NormalizedText::new("  Net\t30\n\n days \r\n");
        assert_eq!(text.as_str(), "Net 30 days");
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(NormalizedText::new("").is_empty());
        assert!(NormalizedText::new(" \n\t \u{a0}").is_empty());
    }

    #[test]
    fn test_relevant_keeps_payment_sentences_only() {
        let text = NormalizedText::new(
            "This Agreement is made in Ohio. Payment is due Net 30. The parties agree to arbitrate.",
        );
        assert_eq!(text.relevant().as_str(), " Payment is due Net 30");
    }

    #[test]
    fn test_relevant_keyword_match_is_case_insensitive_substring() {
        let relevant = RelevantText::from_text("INVOICES are mailed monthly. Governing law is Texas");
        assert_eq!(relevant.as_str(), "INVOICES are mailed monthly");
    }

    #[test]
    fn test_relevant_of_unrelated_text_is_empty() {
        let relevant = RelevantText::from_text("Governing law. Severability. Counterparts");
        assert_eq!(relevant.as_str(), "");
    }

    proptest! {
        #[test]
        fn normalized_text_has_no_whitespace_runs(raw in "[a-z \\t\\n\\r]{0,80}") {
            let text = NormalizedText::new(&raw);
            let s = text.as_str();
            prop_assert!(!s.contains("  "));
            prop_assert!(!s.contains(&['\t', '\n', '\r'][..]));
            prop_assert_eq!(s.trim(), s);
        }

        #[test]
        fn normalization_is_idempotent(raw in "\\PC{0,80}") {
            let once = NormalizedText::new(&raw);
            let twice = NormalizedText::new(once.as_str());
            prop_assert_eq!(once, twice);
        }
    }
}
