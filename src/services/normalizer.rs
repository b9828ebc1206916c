// src/services/normalizer.rs
// DOCUMENTATION: Provider record normalization
// PURPOSE: Map a raw Geoapify feature to the canonical ServiceEntry

use chrono::NaiveDateTime;

use crate::models::{PlaceFeature, ServiceEntry, NO_NAME};
use crate::services::opening_hours;

/// Treat empty strings the same as missing values
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Convert a raw place into a ServiceEntry
/// DOCUMENTATION: Never fails on missing optional fields.
/// Address fallback order: address_line2, then formatted.
pub fn normalize(feature: &PlaceFeature, at: NaiveDateTime) -> ServiceEntry {
    let props = &feature.properties;
    let opening_hours = non_empty(&props.opening_hours).map(str::to_string);

    ServiceEntry {
        name: non_empty(&props.name).unwrap_or(NO_NAME).to_string(),
        address: non_empty(&props.address_line2)
            .or_else(|| non_empty(&props.formatted))
            .map(str::to_string),
        coordinates: feature.geometry.coordinates,
        status: opening_hours::evaluate(opening_hours.as_deref(), at),
        opening_hours,
        place_id: props.place_id.clone(),
        phone: props.phone.clone(),
        category: props.categories.clone(),
    }
}
