// src/models/geoapify.rs
// DOCUMENTATION: Raw response shapes from the Geoapify places API
// PURPOSE: Deserialize provider payloads before normalization

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response from Geoapify places search
/// DOCUMENTATION: A GeoJSON feature collection of point features
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlacesResponse {
    pub features: Vec<PlaceFeature>,
}

/// Individual place from Geoapify
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlaceFeature {
    #[serde(default)]
    pub properties: PlaceProperties,
    pub geometry: PointGeometry,
}

/// Place properties, every field optional
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlaceProperties {
    /// Place name
    pub name: Option<String>,
    /// Street-level address line (preferred for display)
    pub address_line2: Option<String>,
    /// Full formatted address
    pub formatted: Option<String>,
    /// OSM-style opening hours specification
    pub opening_hours: Option<String>,
    /// Geoapify place identifier
    pub place_id: Option<String>,
    pub phone: Option<String>,
    /// Category tags (e.g., ["healthcare", "healthcare.hospital"])
    pub categories: Option<Value>,
}

/// Point geometry, [longitude, latitude]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}
