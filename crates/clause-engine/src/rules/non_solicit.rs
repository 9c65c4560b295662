use super::{ClauseDetector, ClauseFinding};
use crate::normalize::NormalizedText;
use crate::patterns::NON_SOLICIT_PATTERN;

pub const NAME: &str = "non_solicit";

/// Client-hire protection: non-solicit, non-hire, liquidated damages or a
/// conversion fee.
pub struct NonSolicitDetector;

impl ClauseDetector for NonSolicitDetector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn detect(&self, text: &NormalizedText) -> ClauseFinding {
        ClauseFinding::Present(NON_SOLICIT_PATTERN.is_match(text.as_str()))
    }
}
