//! Payment-term candidate extraction
//!
//! Three independent pattern families scan the payment-relevant text and
//! each match proposes at most one [`Candidate`]. Families disagree often
//! ("Net 30" next to "past due after 10 days"), so nothing is decided here;
//! [`crate::resolver`] picks the winner.

use regex::{Captures, Regex};

use super::numeric::parse_duration;
use crate::normalize::RelevantText;
use crate::patterns::{DUE_WITHIN_PATTERN, NET_TERM_PATTERN, PAST_DUE_PATTERN};

/// Shortest and longest durations accepted as real payment terms
pub const MIN_TERM_DAYS: u32 = 5;
pub const MAX_TERM_DAYS: u32 = 365;

/// Rank given to a bare value of 2 from the net and due-within families
pub const TWO_DAY_PRIORITY: u8 = 3;

/// The pattern family a candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFamily {
    /// "Net 30", "net thirty (30)"
    Net,
    /// "due within 45 days", "within ten (10) calendar days"
    DueWithin,
    /// "past due after 10 days"
    PastDue,
}

impl PatternFamily {
    pub const ALL: [PatternFamily; 3] = [
        PatternFamily::Net,
        PatternFamily::DueWithin,
        PatternFamily::PastDue,
    ];

    /// Rank for an in-range (5..=365) duration from this family
    pub fn priority(&self) -> u8 {
        match self {
            PatternFamily::Net => 8,
            PatternFamily::DueWithin => 7,
            PatternFamily::PastDue => 5,
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            PatternFamily::Net => &*NET_TERM_PATTERN,
            PatternFamily::DueWithin => &*DUE_WITHIN_PATTERN,
            PatternFamily::PastDue => &*PAST_DUE_PATTERN,
        }
    }

    /// Pull the duration out of one match. The first non-empty group wins,
    /// so a parenthesized digit run beats the spelled-out word beside it.
    fn duration(&self, caps: &Captures<'_>) -> Option<u32> {
        let groups: &[usize] = match self {
            PatternFamily::Net => &[2, 4, 5],
            PatternFamily::DueWithin => &[2, 1],
            PatternFamily::PastDue => &[1],
        };
        let token = groups
            .iter()
            .filter_map(|&i| caps.get(i))
            .map(|m| m.as_str())
            .find(|s| !s.is_empty())?;
        parse_duration(token)
    }

    /// Rank a resolved duration, or `None` when the value is not a candidate.
    pub fn rank(&self, days: u32) -> Option<u8> {
        match (self, days) {
            (PatternFamily::Net | PatternFamily::DueWithin, 2) => Some(TWO_DAY_PRIORITY),
            (_, d) if (MIN_TERM_DAYS..=MAX_TERM_DAYS).contains(&d) => Some(self.priority()),
            _ => None,
        }
    }
}

/// A proposed payment term and the rank of the family that proposed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub days: u32,
    pub priority: u8,
    pub family: PatternFamily,
}

impl Candidate {
    pub fn new(days: u32, priority: u8, family: PatternFamily) -> Self {
        Self {
            days,
            priority,
            family,
        }
    }
}

/// Run one family over the text, collecting a candidate per usable match.
pub fn extract_family(text: &RelevantText, family: PatternFamily) -> Vec<Candidate> {
    family
        .pattern()
        .captures_iter(text.as_str())
        .filter_map(|caps| {
            let days = family.duration(&caps)?;
            let priority = family.rank(days)?;
            Some(Candidate::new(days, priority, family))
        })
        .collect()
}

/// Run every family and return all candidates, family by family in text order.
pub fn extract_candidates(text: &RelevantText) -> Vec<Candidate> {
    PatternFamily::ALL
        .iter()
        .flat_map(|family| extract_family(text, *family))
        .collect()
}
