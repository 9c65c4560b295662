use super::{ClauseDetector, ClauseFinding};
use crate::normalize::NormalizedText;
use crate::patterns::CONVERSION_PATTERN;

pub const NAME: &str = "conversions";

/// Temp-to-perm conversion language
pub struct ConversionDetector;

impl ClauseDetector for ConversionDetector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn detect(&self, text: &NormalizedText) -> ClauseFinding {
        ClauseFinding::Present(CONVERSION_PATTERN.is_match(text.as_str()))
    }
}
