use serde::{Deserialize, Serialize};

/// How an indemnity clause allocates liability between the parties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndemnityClassification {
    /// No indemnification language anywhere in the document
    #[default]
    None,
    Mutual,
    OneSided,
}

impl IndemnityClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndemnityClassification::None => "none",
            IndemnityClassification::Mutual => "mutual",
            IndemnityClassification::OneSided => "one-sided",
        }
    }
}

/// Facts extracted from one contract. Built once per document and discarded
/// after it has been turned into a [`SignalReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub payment_term_days: Option<u32>,
    pub noa: bool,
    pub non_solicit: bool,
    pub conversions: bool,
    pub indemnity: IndemnityClassification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightStatus {
    Pass,
    Warn,
    Fail,
}

/// One row of the traffic-light summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    pub label: String,
    pub status: LightStatus,
    pub note: String,
}

/// Human-readable reasoning for one fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalReport {
    pub lights: Vec<Light>, // Fixed order, always six entries
    pub cards: Vec<Card>,   // Five entries, no insurance card
}
