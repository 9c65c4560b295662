//! Indemnity balance classification
//!
//! Only the region around the first "indemnify"/"indemnification" is
//! inspected. Mutuality language elsewhere in the document (a "both
//! parties" in the signature block, say) does not make the clause mutual.

use shared_types::IndemnityClassification;
use tracing::debug;

use super::{ClauseDetector, ClauseFinding};
use crate::normalize::NormalizedText;
use crate::patterns::{INDEMNITY_PATTERN, MUTUAL_INDEMNITY_PATTERN};

pub const NAME: &str = "indemnity";

/// Characters kept before the first indemnity mention
pub const WINDOW_BEFORE: usize = 200;
/// Characters kept after the first indemnity mention
pub const WINDOW_AFTER: usize = 400;

pub struct IndemnityDetector {
    before: usize,
    after: usize,
}

impl IndemnityDetector {
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// The text around the first indemnity mention, if there is one.
    pub fn window<'a>(&self, text: &'a str) -> Option<&'a str> {
        let found = INDEMNITY_PATTERN.find(text)?;
        let start = back_chars(text, found.start(), self.before);
        let end = forward_chars(text, found.end(), self.after);
        Some(&text[start..end])
    }

    pub fn classify(&self, text: &str) -> IndemnityClassification {
        match self.window(text) {
            None => IndemnityClassification::None,
            Some(window) if MUTUAL_INDEMNITY_PATTERN.is_match(window) => {
                IndemnityClassification::Mutual
            }
            Some(window) => {
                debug!(window_len = window.len(), "No mutuality language near indemnity clause");
                IndemnityClassification::OneSided
            }
        }
    }
}

impl Default for IndemnityDetector {
    fn default() -> Self {
        Self::new(WINDOW_BEFORE, WINDOW_AFTER)
    }
}

impl ClauseDetector for IndemnityDetector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn detect(&self, text: &NormalizedText) -> ClauseFinding {
        ClauseFinding::Indemnity(self.classify(text.as_str()))
    }
}

/// Byte offset `count` characters before `from`, clamped to the start.
fn back_chars(text: &str, from: usize, count: usize) -> usize {
    if count == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .nth(count - 1)
        .map_or(0, |(i, _)| i)
}

/// Byte offset `count` characters after `from`, clamped to the end.
fn forward_chars(text: &str, from: usize, count: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(count)
        .map_or(text.len(), |(i, _)| from + i)
}
