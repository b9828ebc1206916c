// src/services/ranking.rs
// DOCUMENTATION: Status ranking and filtering
// PURPOSE: Order services for display and hide the ones known to be closed

use crate::models::{ServiceEntry, ServiceStatus};

/// Sort by status (open, then unknown) and drop closed entries
/// DOCUMENTATION: Stable, so provider order is kept within a status.
/// The input slice is left untouched.
pub fn rank_and_filter(entries: &[ServiceEntry]) -> Vec<ServiceEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by_key(|entry| entry.status);
    ranked.retain(|entry| entry.status != ServiceStatus::Closed);
    ranked
}
