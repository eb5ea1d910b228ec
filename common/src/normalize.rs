//! Maps raw spreadsheet rows into [`Candidate`] records.
//!
//! The script backend returns whatever the sheet cells hold: booleans may come
//! as native `true` or as the literal `"TRUE"`, numbers may come as numbers,
//! and any column may be missing. Every field goes through [`to_bool`] or
//! [`to_text`] so that a missing or odd value defaults instead of failing.

use chrono::{DateTime, SecondsFormat};
use serde_json::{Map, Value};

use crate::fetch::FetchError;
use crate::model::candidate::{Candidate, CouncilType};

/// Truthiness of a backend flag: native `true` or the string `"TRUE"`.
pub fn to_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "TRUE",
        _ => false,
    }
}

/// Text form of a backend cell. Missing, null and structured values give `""`.
pub fn to_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (f as i64).to_string(),
            _ => n.to_string(),
        },
        Some(Value::Bool(true)) => "TRUE".to_string(),
        Some(Value::Bool(false)) => "FALSE".to_string(),
        _ => String::new(),
    }
}

/// Birth dates typed into the sheet as numbers lose their leading zeros
/// (`010203` arrives as `10203`).
fn to_birth_date(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(_)) => format!("{:0>6}", to_text(value)),
        _ => to_text(value),
    }
}

/// RFC 3339 form of an epoch-millis instant, used when a row has no timestamp.
pub fn iso_timestamp(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Normalizes one row. Returns `None` for rows that are not visible.
///
/// `position` is the index among visible rows and becomes the candidate id.
pub fn normalize_row(
    row: &Map<String, Value>,
    position: usize,
    fetched_at_ms: i64,
) -> Option<Candidate> {
    if !to_bool(row.get("isVisible")) {
        return None;
    }

    let text = |key: &str| to_text(row.get(key));
    let flag = |key: &str| to_bool(row.get(key));

    let timestamp = match text("timestamp") {
        t if t.is_empty() => iso_timestamp(fetched_at_ms),
        t => t,
    };

    Some(Candidate {
        id: format!("candidate-{position}"),
        name: text("name"),
        birth_date: to_birth_date(row.get("birthDate")),
        phone: text("phone"),
        email: text("email"),
        council_type: CouncilType::from_field(&text("councilType")),
        district: text("district"),
        party: text("party"),
        current_position: text("currentPosition"),
        social_media_url: text("socialMediaUrl"),
        has_social_worker_license: text("hasSocialWorkerLicense"),
        has_paid_membership_fee: flag("hasPaidMembershipFee"),
        has_election_office: flag("hasElectionOffice"),
        office_address: text("officeAddress"),
        has_kickoff_event: flag("hasKickoffEvent"),
        kickoff_event_date: text("kickoffEventDate"),
        kickoff_event_details: text("kickoffEventDetails"),
        career_summary: text("careerSummary"),
        welfare_policy: text("welfarePolicy"),
        candidate_photo_url: text("candidatePhotoUrl"),
        election_flyer_url: text("electionFlyerUrl"),
        is_visible: true,
        approved: true,
        timestamp,
    })
}

/// Normalizes a whole response body.
///
/// The body must be a JSON array. Hidden rows and non-object entries are
/// dropped; ids are assigned in the order of the rows that remain.
pub fn normalize_rows(body: &Value, fetched_at_ms: i64) -> Result<Vec<Candidate>, FetchError> {
    let rows = body.as_array().ok_or(FetchError::NotAnArray)?;

    let candidates = rows
        .iter()
        .filter_map(Value::as_object)
        .filter(|row| to_bool(row.get("isVisible")))
        .enumerate()
        .filter_map(|(position, row)| normalize_row(row, position, fetched_at_ms))
        .collect();

    Ok(candidates)
}
