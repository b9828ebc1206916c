// src/handlers/nearby.rs
// DOCUMENTATION: HTTP handler for nearby services
// PURPOSE: Validate coordinates, call the places query, return ranked services

use crate::errors::LocatorError;
use crate::models::ServicesQueryParams;
use crate::services::{GeoapifyClient, PlaceService};
use actix_web::{web, HttpResponse, Responder};

/// GET /api/services?lat=&lng=&category=&radius=&limit=
/// Open and unknown services near a point, open first
pub async fn nearby_services(
    client: web::Data<GeoapifyClient>,
    query: web::Query<ServicesQueryParams>,
) -> Result<impl Responder, LocatorError> {
    let query = query.into_inner().into_query().map_err(|e| {
        log::warn!("Rejected nearby services request: {}", e);
        e
    })?;

    let services = PlaceService::query_places(client.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(services))
}

/// Configuration for nearby services routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/services", web::get().to(nearby_services));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{ServiceEntry, ServiceStatus};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[actix_web::test]
    async fn test_missing_coordinates_rejected() {
        let client = GeoapifyClient::new(&Config::for_tests("http://127.0.0.1:9"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/services?lat=40.7&category=healthcare.hospital")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Missing lat/lng");
    }

    #[actix_web::test]
    async fn test_non_numeric_coordinates_rejected() {
        let client = GeoapifyClient::new(&Config::for_tests("http://127.0.0.1:9"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/services?lat=north&lng=-74&category=healthcare.hospital")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Invalid lat/lng");
    }

    #[actix_web::test]
    async fn test_returns_ranked_services() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/places"))
            .and(query_param("categories", "service.police"))
            .and(query_param("filter", "circle:-74,40.7,1500"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "properties": { "name": "Precinct 5", "categories": ["service.police"] },
                        "geometry": { "coordinates": [-74.0, 40.7] }
                    },
                    {
                        "properties": { "name": "Precinct 1", "opening_hours": "24/7" },
                        "geometry": { "coordinates": [-74.1, 40.8] }
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeoapifyClient::new(&Config::for_tests(&server.uri()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/services?lat=40.7&lng=-74.0&category=service.police&radius=1500&limit=5")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let services: Vec<ServiceEntry> = test::read_body_json(resp).await;
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].name, "Precinct 1");
        assert_eq!(services[0].status, ServiceStatus::Open);
        assert_eq!(services[1].name, "Precinct 5");
        assert_eq!(services[1].status, ServiceStatus::Unknown);
    }

    #[actix_web::test]
    async fn test_upstream_failure_is_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/places"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = GeoapifyClient::new(&Config::for_tests(&server.uri()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/services?lat=40.7&lng=-74.0&category=service.police")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_server_error());
    }
}
