// src/models/service_entry.rs
// DOCUMENTATION: Canonical record returned for every nearby service
// PURPOSE: Shape consumed verbatim by the display layer

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel used when the provider sends no usable name
pub const NO_NAME: &str = "(No Name)";

/// Real-time status of a service point
/// DOCUMENTATION: Derived from the opening-hours specification, never supplied by upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Open,
    Unknown,
    Closed,
}

impl ServiceStatus {
    /// Display priority, lower ranks first
    pub fn rank(self) -> u8 {
        match self {
            ServiceStatus::Open => 0,
            ServiceStatus::Unknown => 1,
            ServiceStatus::Closed => 2,
        }
    }
}

impl Ord for ServiceStatus {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for ServiceStatus {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A normalized nearby service
/// DOCUMENTATION: Built once by the normalizer, then only copied or dropped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// Human-readable label, `(No Name)` when missing
    pub name: String,

    /// Best available address line
    pub address: Option<String>,

    /// [longitude, latitude]
    pub coordinates: [f64; 2],

    pub status: ServiceStatus,

    /// Raw opening-hours specification, kept for display
    pub opening_hours: Option<String>,

    /// Provider place identifier
    pub place_id: Option<String>,

    pub phone: Option<String>,

    /// Provider category tags, untouched
    pub category: Option<Value>,
}
