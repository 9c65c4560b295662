//! Fact-to-signal composition
//!
//! Turns an [`AnalysisResult`] into the traffic-light summary and reasoning
//! cards. Pure function of its inputs; composing the same result twice gives
//! the same report.

use shared_types::{AnalysisResult, Card, IndemnityClassification, Light, LightStatus, SignalReport};

/// Payment terms at or under this many days pass
pub const PAYMENT_PASS_MAX_DAYS: u32 = 30;
/// Payment terms at or under this many days warn; longer terms fail
pub const PAYMENT_WARN_MAX_DAYS: u32 = 60;

pub fn payment_status(days: Option<u32>) -> LightStatus {
    match days {
        None => LightStatus::Fail,
        Some(d) if d <= PAYMENT_PASS_MAX_DAYS => LightStatus::Pass,
        Some(d) if d <= PAYMENT_WARN_MAX_DAYS => LightStatus::Warn,
        Some(_) => LightStatus::Fail,
    }
}

pub fn indemnity_status(indemnity: IndemnityClassification) -> LightStatus {
    match indemnity {
        IndemnityClassification::None | IndemnityClassification::Mutual => LightStatus::Pass,
        IndemnityClassification::OneSided => LightStatus::Fail,
    }
}

fn light(label: impl Into<String>, status: LightStatus, note: &str) -> Light {
    Light {
        label: label.into(),
        status,
        note: note.to_string(),
    }
}

fn card(title: &str, body: impl Into<String>) -> Card {
    Card {
        title: title.to_string(),
        body: body.into(),
    }
}

fn presence(present: bool) -> (LightStatus, &'static str, &'static str) {
    if present {
        (LightStatus::Pass, "(present)", "Present")
    } else {
        (LightStatus::Warn, "(missing)", "Missing")
    }
}

/// Compose lights and cards. `counterparty` is the factor the notice of
/// assignment was checked against.
pub fn compose(result: &AnalysisResult, counterparty: &str) -> SignalReport {
    let terms_note = match result.payment_term_days {
        Some(days) => format!("({} days)", days),
        None => "(not found)".to_string(),
    };
    let terms_body = match result.payment_term_days {
        Some(days) => format!("Reason: Terms — {} days", days),
        None => "Reason: Terms — (not found)".to_string(),
    };

    let (noa_status, noa_note, noa_body) = if result.noa {
        (
            LightStatus::Pass,
            "(found)",
            format!("Reason: NOA referencing {} present.", counterparty),
        )
    } else {
        (
            LightStatus::Fail,
            "(not found)",
            format!(
                "Reason: NOA not found — must include verbatim “{}” language.",
                counterparty
            ),
        )
    };

    let (hire_status, hire_note, hire_body) = presence(result.non_solicit);
    let (conv_status, conv_note, conv_body) = presence(result.conversions);

    let (indemnity_note, indemnity_body) = match result.indemnity {
        IndemnityClassification::None => ("(none)", "None (preferred)"),
        IndemnityClassification::Mutual => ("(mutual)", "Mutual"),
        IndemnityClassification::OneSided => ("(one-sided)", "One-sided (client-favored)"),
    };

    let lights = vec![
        light(
            "Payment Terms",
            payment_status(result.payment_term_days),
            &terms_note,
        ),
        light(format!("NOA to {}", counterparty), noa_status, noa_note),
        light("Client Hire / Non-Solicit", hire_status, hire_note),
        light("Conversions", conv_status, conv_note),
        light(
            "Indemnity",
            indemnity_status(result.indemnity),
            indemnity_note,
        ),
        // Insurance minimums are client-specific and never auto-evaluated
        light(
            "Insurance",
            LightStatus::Warn,
            "(client minimums not auto-evaluated here)",
        ),
    ];

    let cards = vec![
        card("Payment Terms", terms_body),
        card("Notice of Assignment", noa_body),
        card("Client Hire / Non-Solicit", hire_body),
        card("Conversions (Temp-to-Perm)", conv_body),
        card("Indemnity", indemnity_body),
    ];

    SignalReport { lights, cards }
}
