//! Regex patterns shared by the payment-term extractor and the clause rules

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Sentence and line boundaries used to cut text into segments
    pub static ref SEGMENT_BREAK_PATTERN: Regex = Regex::new(r"[\r\n.]+").unwrap();

    /// A segment is payment-relevant when it mentions any of these words
    pub static ref PAYMENT_KEYWORD_PATTERN: Regex =
        Regex::new(r"(?i)(payment|invoice|receipt|payable|net|due|days?)").unwrap();

    /// "Net 30", "net-45", "net thirty (30)", "net sixty"
    pub static ref NET_TERM_PATTERN: Regex = Regex::new(
        r"(?i)\bnet[-\s]?(([0-9]{1,3})|([a-z]+)\s*\(\s*([0-9]{1,3})\s*\)|([a-z]+))\b"
    )
    .unwrap();

    /// "due within 45 days", "within thirty (30) calendar days", "due in 10 days"
    pub static ref DUE_WITHIN_PATTERN: Regex = Regex::new(
        r"(?i)\b(?:due\s+(?:in|within)|within)\s+(?:\(?([a-z]+)\)?\s*)?(?:\(?([0-9]{1,3})\)?)?\s*(?:calendar\s*)?days?\b"
    )
    .unwrap();

    /// "past due after 10 days". ASCII digits only, like the other families.
    pub static ref PAST_DUE_PATTERN: Regex =
        Regex::new(r"(?i)\bpast\s+due\s+(?:after\s+)?([0-9]{1,3})\s*days?\b").unwrap();

    /// Unambiguous two-day terms that let a resolved value of 2 stand
    pub static ref EXPLICIT_TWO_DAY_PATTERN: Regex = Regex::new(
        r"(?i)\b(net[-\s]*2|within\s*\(?2\)?\s*(?:business\s*)?days?)\b"
    )
    .unwrap();

    pub static ref ASSIGNMENT_NOTICE_PATTERN: Regex = Regex::new(
        r"(?i)(notice\s+of\s+assignment|assignment\s+notice|assignment\s+of\s+accounts)"
    )
    .unwrap();

    pub static ref NON_SOLICIT_PATTERN: Regex = Regex::new(
        r"(?i)(non[-\s]?solicit|non[-\s]?hire|client\s+hire|liquidated\s+damages|conversion\s+fee)"
    )
    .unwrap();

    pub static ref CONVERSION_PATTERN: Regex =
        Regex::new(r"(?i)(conversion|temp[-\s]?to[-\s]?perm)").unwrap();

    pub static ref INDEMNITY_PATTERN: Regex = Regex::new(r"(?i)indemnif(?:y|ication)").unwrap();

    pub static ref MUTUAL_INDEMNITY_PATTERN: Regex =
        Regex::new(r"(?i)(each\s+party|mutual(?:ly)?\s+indemn|both\s+parties)").unwrap();
}

/// Build a whole-word, case-insensitive pattern for a counterparty name,
/// tolerating any (or no) whitespace between its words.
///
/// "Rev Capital" matches "REV CAPITAL", "Rev  Capital" and "RevCapital".
pub fn counterparty_pattern(name: &str) -> Option<Regex> {
    let words: Vec<String> = name.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{}\b", words.join(r"\s*"))).ok()
}
