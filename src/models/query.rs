// src/models/query.rs
// DOCUMENTATION: Request and query models
// PURPOSE: Inputs accepted at the HTTP boundary and passed to the core

use geo_types::Point;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::LocatorError;

/// Default search radius in meters
pub const DEFAULT_RADIUS_M: u32 = 30_000;

/// Default maximum number of provider results
pub const DEFAULT_LIMIT: u32 = 20;

/// Raw query string for GET /api/services
/// DOCUMENTATION: Everything arrives as text so missing and malformed
/// values can be reported separately
#[derive(Debug, Deserialize)]
pub struct ServicesQueryParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub category: Option<String>,
    pub radius: Option<String>,
    pub limit: Option<String>,
}

/// Raw query string for GET /api/location
#[derive(Debug, Deserialize)]
pub struct LocationQueryParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// Validated coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

/// Nearby services query
/// DOCUMENTATION: Input of the places query. Validation attributes are
/// checked by the handlers; the query itself passes values through untouched.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NearbyQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    /// Provider category tag (e.g., "healthcare.hospital")
    #[validate(length(min = 1, max = 255))]
    pub category: String,
    /// Search radius in meters
    #[validate(range(min = 1))]
    pub radius: u32,
    /// Maximum number of results requested from the provider
    #[validate(range(min = 1, max = 500))]
    pub limit: u32,
}

impl NearbyQuery {
    /// Query with the default radius and limit
    pub fn new(lat: f64, lng: f64, category: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            category: category.into(),
            radius: DEFAULT_RADIUS_M,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Circular region covered by this query
    pub fn search_area(&self) -> SearchArea {
        SearchArea {
            center: Point::new(self.lng, self.lat),
            radius_m: self.radius,
        }
    }
}

/// Circular search region
/// DOCUMENTATION: Center is stored as a geo point (x = longitude, y = latitude)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub center: Point<f64>,
    pub radius_m: u32,
}

impl SearchArea {
    /// Geoapify `filter` parameter: circle:lon,lat,radiusMeters
    pub fn to_filter(&self) -> String {
        format!(
            "circle:{},{},{}",
            self.center.x(),
            self.center.y(),
            self.radius_m
        )
    }
}

/// Response body for GET /api/location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityResponse {
    pub city: String,
}

/// Parse a lat/lng pair from raw query values
/// DOCUMENTATION: Missing values and non-numeric values get distinct messages
pub fn parse_coordinates(
    lat: Option<&str>,
    lng: Option<&str>,
) -> Result<Coordinates, LocatorError> {
    let (lat, lng) = match (lat, lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => return Err(LocatorError::ValidationError("Missing lat/lng".to_string())),
    };

    match (parse_finite(lat), parse_finite(lng)) {
        (Some(lat), Some(lng)) => Ok(Coordinates { lat, lng }),
        _ => Err(LocatorError::ValidationError("Invalid lat/lng".to_string())),
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an optional positive integer parameter, falling back to `default`
fn parse_optional_u32(
    raw: Option<&str>,
    default: u32,
    field: &str,
) -> Result<u32, LocatorError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| LocatorError::ValidationError(format!("Invalid {}", field))),
    }
}

impl ServicesQueryParams {
    /// Convert and validate into a nearby query
    pub fn into_query(self) -> Result<NearbyQuery, LocatorError> {
        let coords = parse_coordinates(self.lat.as_deref(), self.lng.as_deref())?;
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .ok_or_else(|| LocatorError::ValidationError("Missing category".to_string()))?;

        let query = NearbyQuery {
            radius: parse_optional_u32(self.radius.as_deref(), DEFAULT_RADIUS_M, "radius")?,
            limit: parse_optional_u32(self.limit.as_deref(), DEFAULT_LIMIT, "limit")?,
            ..NearbyQuery::new(coords.lat, coords.lng, category)
        };

        query
            .validate()
            .map_err(|e| LocatorError::ValidationError(e.to_string()))?;

        Ok(query)
    }
}

impl LocationQueryParams {
    /// Convert and validate into a coordinate pair
    pub fn into_coordinates(self) -> Result<Coordinates, LocatorError> {
        let coords = parse_coordinates(self.lat.as_deref(), self.lng.as_deref())?;
        coords
            .validate()
            .map_err(|e| LocatorError::ValidationError(e.to_string()))?;
        Ok(coords)
    }
}
