// src/services/location_service.rs
// DOCUMENTATION: Reverse geocoding to a city name
// PURPOSE: Resolve the city enclosing a coordinate pair

use crate::errors::LocatorError;
use crate::services::GeoapifyClient;

pub struct LocationService;

impl LocationService {
    /// Resolve the city for a coordinate pair
    /// DOCUMENTATION: Uses the first result's `city` property. A successful
    /// call without a usable city is CityNotFound, not an upstream failure.
    pub async fn resolve_city(
        client: &GeoapifyClient,
        lat: f64,
        lng: f64,
    ) -> Result<String, LocatorError> {
        let collection = client.reverse_geocode(lat, lng).await?;

        let city = collection
            .features
            .first()
            .and_then(|feature| feature.properties.as_ref())
            .and_then(|props| props.get("city"))
            .and_then(|value| value.as_str())
            .filter(|city| !city.is_empty());

        match city {
            Some(city) => {
                log::info!("Resolved ({}, {}) to {}", lat, lng, city);
                Ok(city.to_string())
            }
            None => {
                log::warn!("No city found for ({}, {})", lat, lng);
                Err(LocatorError::CityNotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_returning(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/geocode/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_resolves_city() {
        let server = server_returning(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {
                    "city": "Paris",
                    "country": "France",
                    "result_type": "city"
                },
                "geometry": { "type": "Point", "coordinates": [2.3522, 48.8566] }
            }]
        }))
        .await;

        let client = GeoapifyClient::new(&Config::for_tests(&server.uri()));
        let city = LocationService::resolve_city(&client, 48.8566, 2.3522)
            .await
            .unwrap();
        assert_eq!(city, "Paris");
    }

    #[tokio::test]
    async fn test_empty_collection_is_not_found() {
        let server = server_returning(json!({
            "type": "FeatureCollection",
            "features": []
        }))
        .await;

        let client = GeoapifyClient::new(&Config::for_tests(&server.uri()));
        let err = LocationService::resolve_city(&client, 0.0, 0.0)
            .await
            .unwrap_err();
        assert!(matches!(err, LocatorError::CityNotFound));
    }

    #[tokio::test]
    async fn test_missing_city_property_is_not_found() {
        let server = server_returning(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "country": "Atlantis", "city": "" },
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            }]
        }))
        .await;

        let client = GeoapifyClient::new(&Config::for_tests(&server.uri()));
        let err = LocationService::resolve_city(&client, 0.0, 0.0)
            .await
            .unwrap_err();
        assert!(matches!(err, LocatorError::CityNotFound));
    }

    #[tokio::test]
    async fn test_network_error_is_upstream() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

        let client = GeoapifyClient::new(&Config::for_tests(&format!("http://{}", addr)));
        let err = LocationService::resolve_city(&client, 0.0, 0.0)
            .await
            .unwrap_err();
        assert!(matches!(err, LocatorError::UpstreamError { .. }));
    }
}
