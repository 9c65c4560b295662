use regex::Regex;

use super::{ClauseDetector, ClauseFinding};
use crate::normalize::NormalizedText;
use crate::patterns::{counterparty_pattern, ASSIGNMENT_NOTICE_PATTERN};

pub const NAME: &str = "noa";

/// Factor the notice of assignment must name
pub const DEFAULT_COUNTERPARTY: &str = "Rev Capital";

/// Notice of assignment naming the factoring counterparty.
///
/// Both the assignment phrase and the counterparty name must appear, but
/// anywhere in the document; there is no proximity requirement.
pub struct AssignmentNoticeDetector {
    counterparty: String,
    counterparty_pattern: Option<Regex>,
}

impl AssignmentNoticeDetector {
    pub fn new(counterparty: &str) -> Self {
        Self {
            counterparty: counterparty.trim().to_string(),
            counterparty_pattern: counterparty_pattern(counterparty),
        }
    }

    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }
}

impl Default for AssignmentNoticeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTERPARTY)
    }
}

impl ClauseDetector for AssignmentNoticeDetector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn detect(&self, text: &NormalizedText) -> ClauseFinding {
        let text = text.as_str();
        let names_counterparty = self
            .counterparty_pattern
            .as_ref()
            .is_some_and(|re| re.is_match(text));
        ClauseFinding::Present(names_counterparty && ASSIGNMENT_NOTICE_PATTERN.is_match(text))
    }
}
