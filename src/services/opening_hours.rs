// src/services/opening_hours.rs
// DOCUMENTATION: Opening-hours status evaluator
// PURPOSE: Decide whether a place is open, closed or unknown at a given instant
//
// Parsing and evaluation of the OpenStreetMap `opening_hours` syntax are done
// by the `opening-hours` crate. No holiday calendar is configured, so PH/SH
// selectors never match.

use chrono::NaiveDateTime;

use crate::models::ServiceStatus;

/// Status of a place given its raw specification
/// DOCUMENTATION: Missing or unparseable specifications yield `Unknown`.
/// A parsed specification is either open at `at` or closed: states the
/// specification itself leaves undecided count as closed.
/// Parse errors are logged and never returned.
pub fn evaluate(spec: Option<&str>, at: NaiveDateTime) -> ServiceStatus {
    let spec = match spec.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return ServiceStatus::Unknown,
    };

    match ::opening_hours::OpeningHours::parse(spec) {
        Ok(hours) if hours.is_open(at) => ServiceStatus::Open,
        Ok(_) => ServiceStatus::Closed,
        Err(e) => {
            log::debug!("Unparseable opening hours {:?}: {}", spec, e);
            ServiceStatus::Unknown
        }
    }
}
