//! End-to-end checks of the engine against staffing-agreement excerpts

use clause_engine::{ClauseEngine, EngineError, IndemnityClassification};
use pretty_assertions::assert_eq;
use shared_types::LightStatus;

const STAFFING_AGREEMENT: &str = "
MASTER STAFFING SERVICES AGREEMENT

1. SERVICES. Agency will furnish temporary personnel to Client.

2. PAYMENT. Agency will invoice Client weekly. Invoices are due within
   forty-five days of the invoice date. Balances past due after 10 days
   accrue interest at 1.5% per month.

3. NOTICE OF ASSIGNMENT. Agency has assigned its accounts receivable to
   Rev Capital. All payments must be remitted to Rev Capital.

4. CLIENT HIRE. If Client hires an Agency employee, Client shall pay a
   conversion fee equal to 20% of first-year salary.

5. INDEMNIFICATION. Client shall indemnify, defend and hold Agency harmless
   from claims arising from Client's workplace.
";

fn statuses(engine: &ClauseEngine, text: &str) -> Vec<LightStatus> {
    let result = engine.analyze_raw(text).unwrap();
    engine.report(&result).lights.iter().map(|l| l.status).collect()
}

#[test]
fn staffing_agreement_signals() {
    let engine = ClauseEngine::new();
    let result = engine.analyze_raw(STAFFING_AGREEMENT).unwrap();

    // "forty-five" is not a table word, so the past-due clause is the only term
    assert_eq!(result.payment_term_days, Some(10));
    assert!(result.noa);
    assert!(result.non_solicit);
    assert!(result.conversions);
    assert_eq!(result.indemnity, IndemnityClassification::OneSided);

    assert_eq!(
        statuses(&engine, STAFFING_AGREEMENT),
        vec![
            LightStatus::Pass,
            LightStatus::Pass,
            LightStatus::Pass,
            LightStatus::Pass,
            LightStatus::Fail,
            LightStatus::Warn,
        ]
    );
}

#[test]
fn due_within_outranks_past_due() {
    let engine = ClauseEngine::new();
    let text = "Invoices past due after 10 days are subject to a late fee. \
                Invoices are due within 45 days of receipt.";
    assert_eq!(engine.analyze_raw(text).unwrap().payment_term_days, Some(45));
}

#[test]
fn net_outranks_larger_due_within() {
    let engine = ClauseEngine::new();
    let text = "Client shall pay all invoices within 60 days. Standard terms are Net 30.";
    assert_eq!(engine.analyze_raw(text).unwrap().payment_term_days, Some(30));
}

#[test]
fn spelled_out_net_term() {
    let engine = ClauseEngine::new();
    let text = "Payment terms: net ninety (90) days from receipt of invoice.";
    let result = engine.analyze_raw(text).unwrap();
    assert_eq!(result.payment_term_days, Some(90));
    assert_eq!(engine.report(&result).lights[0].status, LightStatus::Fail);
    assert_eq!(engine.report(&result).lights[0].note, "(90 days)");
}

#[test]
fn two_day_term_needs_digit_anchor() {
    let engine = ClauseEngine::new();

    let unanchored = "Invoices are payable net two days after delivery.";
    assert_eq!(engine.analyze_raw(unanchored).unwrap().payment_term_days, None);

    let anchored = "Invoices are payable net two. Payment is required within (2) days.";
    assert_eq!(engine.analyze_raw(anchored).unwrap().payment_term_days, Some(2));
}

#[test]
fn any_sentence_mentioning_days_is_scanned() {
    let engine = ClauseEngine::new();
    // Relevance is keyword based, so a notice period reads as a payment term
    let text = "Either party may terminate on notice given within 15 days.";
    assert_eq!(engine.analyze_raw(text).unwrap().payment_term_days, Some(15));

    let no_keyword = "Either party may terminate within the term";
    assert_eq!(engine.analyze_raw(no_keyword).unwrap().payment_term_days, None);
}

#[test]
fn mutual_indemnity_passes() {
    let engine = ClauseEngine::new();
    let text = "Each party shall indemnify and hold harmless the other party.";
    let result = engine.analyze_raw(text).unwrap();
    assert_eq!(result.indemnity, IndemnityClassification::Mutual);
    assert_eq!(engine.report(&result).lights[4].status, LightStatus::Pass);
}

#[test]
fn noa_requires_counterparty() {
    let engine = ClauseEngine::new();
    let text = "Notice of Assignment: remit payment to First Funding LLC.";
    let result = engine.analyze_raw(text).unwrap();
    assert!(!result.noa);
    assert_eq!(engine.report(&result).lights[1].note, "(not found)");
}

#[test]
fn unreadable_document_is_rejected() {
    let engine = ClauseEngine::new();
    assert_eq!(engine.analyze_raw("\n\n\t  \n"), Err(EngineError::EmptyDocument));
}

#[test]
fn analysis_is_repeatable() {
    let engine = ClauseEngine::new();
    let first = engine.analyze_raw(STAFFING_AGREEMENT).unwrap();
    let second = engine.analyze_raw(STAFFING_AGREEMENT).unwrap();
    assert_eq!(first, second);
    assert_eq!(engine.report(&first), engine.report(&second));
}

#[test]
fn report_serializes_to_wire_shape() {
    let engine = ClauseEngine::new();
    let result = engine.analyze_raw(STAFFING_AGREEMENT).unwrap();
    let json = serde_json::to_value(engine.report(&result)).unwrap();

    assert_eq!(json["lights"][0]["label"], "Payment Terms");
    assert_eq!(json["lights"][0]["status"], "pass");
    assert_eq!(json["lights"][0]["note"], "(10 days)");
    assert_eq!(json["lights"][4]["status"], "fail");
    assert_eq!(json["cards"][1]["title"], "Notice of Assignment");
    assert_eq!(json["cards"].as_array().unwrap().len(), 5);
}
