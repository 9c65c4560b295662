//! Picks one payment term out of competing candidates
//!
//! Policy: highest priority wins, ties go to the shortest duration. A
//! winning value of 2 only stands when the text also carries an explicit
//! two-day term ("net 2", "within (2) days"); otherwise it is dropped.

use tracing::debug;

use crate::extractors::payment_terms::{extract_candidates, Candidate};
use crate::normalize::RelevantText;
use crate::patterns::EXPLICIT_TWO_DAY_PATTERN;

/// Order candidates by priority descending, then duration ascending.
/// Stable, so equal candidates keep their extraction order.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.days.cmp(&b.days)));
}

/// Resolve a candidate list against the text it was extracted from.
pub fn resolve(mut candidates: Vec<Candidate>, text: &RelevantText) -> Option<u32> {
    rank_candidates(&mut candidates);
    let winner = candidates.first()?;

    if winner.days == 2 && !EXPLICIT_TWO_DAY_PATTERN.is_match(text.as_str()) {
        debug!(
            candidates = candidates.len(),
            "Discarding two-day payment term without an explicit anchor"
        );
        return None;
    }

    debug!(
        days = winner.days,
        priority = winner.priority,
        family = ?winner.family,
        "Resolved payment term"
    );
    Some(winner.days)
}

/// Extract and resolve the payment term of a document in one pass.
pub fn find_payment_days(text: &RelevantText) -> Option<u32> {
    resolve(extract_candidates(text), text)
}
