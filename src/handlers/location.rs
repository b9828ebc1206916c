// src/handlers/location.rs
// DOCUMENTATION: HTTP handler for current-location city lookup
// PURPOSE: Validate coordinates, reverse geocode, return {city}

use crate::errors::LocatorError;
use crate::models::{CityResponse, LocationQueryParams};
use crate::services::{GeoapifyClient, LocationService};
use actix_web::{web, HttpResponse, Responder};

/// GET /api/location?lat=&lng=
/// City enclosing the given point, 404 when the provider has none
pub async fn current_location(
    client: web::Data<GeoapifyClient>,
    query: web::Query<LocationQueryParams>,
) -> Result<impl Responder, LocatorError> {
    let coords = query.into_inner().into_coordinates().map_err(|e| {
        log::warn!("Rejected location request: {}", e);
        e
    })?;

    log::debug!("Current location lookup: lat={}, lng={}", coords.lat, coords.lng);

    let city = LocationService::resolve_city(client.get_ref(), coords.lat, coords.lng).await?;
    Ok(HttpResponse::Ok().json(CityResponse { city }))
}

/// Configuration for location routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/location", web::get().to(current_location));
}
