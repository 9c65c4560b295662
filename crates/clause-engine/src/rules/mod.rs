//! Clause detectors
//!
//! Every detector is an independent predicate over the full normalized
//! text. The [`DetectorRegistry`] runs them all and keys the findings by
//! detector name; adding a clause type means adding a detector, not editing
//! the others.

pub mod assignment;
pub mod conversions;
pub mod indemnity;
pub mod non_solicit;

use std::collections::BTreeMap;

use shared_types::IndemnityClassification;

use crate::normalize::NormalizedText;

pub use assignment::AssignmentNoticeDetector;
pub use conversions::ConversionDetector;
pub use indemnity::IndemnityDetector;
pub use non_solicit::NonSolicitDetector;

/// Outcome of one detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseFinding {
    Present(bool),
    Indemnity(IndemnityClassification),
}

impl ClauseFinding {
    pub fn is_present(&self) -> bool {
        match self {
            ClauseFinding::Present(present) => *present,
            ClauseFinding::Indemnity(class) => *class != IndemnityClassification::None,
        }
    }
}

pub trait ClauseDetector: Send + Sync {
    /// Stable key the finding is stored under
    fn name(&self) -> &'static str;

    fn detect(&self, text: &NormalizedText) -> ClauseFinding;
}

/// Findings of one registry pass, keyed by detector name
pub type ClauseFindings = BTreeMap<&'static str, ClauseFinding>;

/// Ordered collection of clause detectors
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn ClauseDetector>>,
}

impl DetectorRegistry {
    pub fn empty() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// NOA, non-solicit, conversions and indemnity, with NOA looking for
    /// `counterparty`.
    pub fn with_counterparty(counterparty: &str) -> Self {
        let mut registry = Self::empty();
        registry.register(AssignmentNoticeDetector::new(counterparty));
        registry.register(NonSolicitDetector);
        registry.register(ConversionDetector);
        registry.register(IndemnityDetector::default());
        registry
    }

    /// Add a detector. A detector with the same name replaces the old one.
    pub fn register<D: ClauseDetector + 'static>(&mut self, detector: D) {
        self.detectors.retain(|d| d.name() != detector.name());
        self.detectors.push(Box::new(detector));
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    pub fn detect_all(&self, text: &NormalizedText) -> ClauseFindings {
        self.detectors
            .iter()
            .map(|d| (d.name(), d.detect(text)))
            .collect()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::with_counterparty(assignment::DEFAULT_COUNTERPARTY)
    }
}
