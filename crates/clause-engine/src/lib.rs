//! Contract clause signals
//!
//! Extracts a payment term and clause detections (notice of assignment,
//! non-solicit, conversions, indemnity balance) from plain contract text and
//! turns them into a traffic-light summary.
//!
//! ```
//! use clause_engine::ClauseEngine;
//! use shared_types::LightStatus;
//!
//! let engine = ClauseEngine::new();
//! let result = engine.analyze_raw("Invoices are payable Net 45 days.").unwrap();
//! assert_eq!(result.payment_term_days, Some(45));
//!
//! let report = engine.report(&result);
//! assert_eq!(report.lights[0].status, LightStatus::Warn);
//! ```

pub mod error;
pub mod extractors;
pub mod normalize;
pub mod patterns;
pub mod resolver;
pub mod rules;
pub mod signals;

use tracing::debug;

use rules::{
    assignment, conversions, indemnity, non_solicit, ClauseDetector, ClauseFinding,
    ClauseFindings, DetectorRegistry,
};

pub use error::EngineError;
pub use normalize::{NormalizedText, RelevantText};
pub use shared_types::{AnalysisResult, IndemnityClassification, SignalReport};

/// ClauseEngine entry point
///
/// Holds no per-document state; one engine can analyze any number of
/// documents concurrently.
pub struct ClauseEngine {
    counterparty: String,
    registry: DetectorRegistry,
}

impl ClauseEngine {
    pub fn new() -> Self {
        Self::with_counterparty(assignment::DEFAULT_COUNTERPARTY)
    }

    /// Engine whose notice-of-assignment check looks for `counterparty`
    pub fn with_counterparty(counterparty: &str) -> Self {
        Self {
            counterparty: counterparty.trim().to_string(),
            registry: DetectorRegistry::with_counterparty(counterparty),
        }
    }

    /// Add or replace a clause detector. Findings of detectors the
    /// [`AnalysisResult`] has no field for are available from
    /// [`ClauseEngine::detect_clauses`].
    pub fn register<D: ClauseDetector + 'static>(&mut self, detector: D) {
        self.registry.register(detector);
    }

    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    /// Analyze already-normalized text.
    pub fn analyze(&self, text: &NormalizedText) -> Result<AnalysisResult, EngineError> {
        if text.is_empty() {
            return Err(EngineError::EmptyDocument);
        }

        let payment_term_days = resolver::find_payment_days(&text.relevant());
        let findings = self.registry.detect_all(text);

        let result = AnalysisResult {
            payment_term_days,
            noa: flag(&findings, assignment::NAME),
            non_solicit: flag(&findings, non_solicit::NAME),
            conversions: flag(&findings, conversions::NAME),
            indemnity: match findings.get(indemnity::NAME) {
                Some(ClauseFinding::Indemnity(class)) => *class,
                _ => IndemnityClassification::None,
            },
        };

        debug!(
            payment_term_days = ?result.payment_term_days,
            noa = result.noa,
            non_solicit = result.non_solicit,
            conversions = result.conversions,
            indemnity = result.indemnity.as_str(),
            "Contract analyzed"
        );

        Ok(result)
    }

    /// Normalize raw extracted text, then analyze it.
    pub fn analyze_raw(&self, raw: &str) -> Result<AnalysisResult, EngineError> {
        self.analyze(&NormalizedText::new(raw))
    }

    /// Run every registered detector and return the raw findings.
    pub fn detect_clauses(&self, text: &NormalizedText) -> ClauseFindings {
        self.registry.detect_all(text)
    }

    /// Lights and cards for an analysis result
    pub fn report(&self, result: &AnalysisResult) -> SignalReport {
        signals::compose(result, &self.counterparty)
    }
}

impl Default for ClauseEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn flag(findings: &ClauseFindings, name: &str) -> bool {
    findings.get(name).is_some_and(ClauseFinding::is_present)
}
