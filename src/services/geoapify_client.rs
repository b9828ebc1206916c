// src/services/geoapify_client.rs
// DOCUMENTATION: Geoapify API client
// PURPOSE: Handle communication with the Geoapify places and reverse geocoding APIs

use crate::config::Config;
use crate::errors::LocatorError;
use crate::models::{PlaceFeature, PlacesResponse, SearchArea};
use geojson::FeatureCollection;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Geoapify API client
/// DOCUMENTATION: Holds the API key and endpoints injected at startup.
/// Read-only after construction, shared across requests.
pub struct GeoapifyClient {
    /// HTTP client for making requests
    client: Client,
    /// Geoapify API key
    api_key: String,
    /// Places search endpoint
    places_url: String,
    /// Reverse geocoding endpoint
    reverse_url: String,
}

impl GeoapifyClient {
    /// Create new Geoapify client from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.geoapify_api_key.clone(),
            places_url: config.geoapify_places_url.clone(),
            reverse_url: config.geoapify_reverse_url.clone(),
        }
    }

    /// Search places of a category inside a circular area
    /// DOCUMENTATION: Issues exactly one request for up to `limit` features
    ///
    /// # Arguments
    /// * `area` - Center and radius of the search
    /// * `category` - Geoapify category tag (e.g., "healthcare.hospital")
    /// * `limit` - Maximum number of features to return
    ///
    /// # Returns
    /// Raw features in provider order
    pub async fn search_places(
        &self,
        area: &SearchArea,
        category: &str,
        limit: u32,
    ) -> Result<Vec<PlaceFeature>, LocatorError> {
        let params = [
            ("categories", category.to_string()),
            ("filter", area.to_filter()),
            ("limit", limit.to_string()),
        ];

        let response: PlacesResponse = self.get_json(&self.places_url, &params).await?;

        log::info!(
            "Geoapify places search returned {} features for {}",
            response.features.len(),
            category
        );
        Ok(response.features)
    }

    /// Reverse geocode a coordinate pair
    /// DOCUMENTATION: Restricted to city-level results
    ///
    /// # Returns
    /// The provider's feature collection, possibly empty
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<FeatureCollection, LocatorError> {
        let params = [
            ("lat", lat.to_string()),
            ("lon", lng.to_string()),
            ("type", "city".to_string()),
        ];

        let collection: FeatureCollection = self.get_json(&self.reverse_url, &params).await?;

        log::debug!(
            "Geoapify reverse geocode returned {} features",
            collection.features.len()
        );
        Ok(collection)
    }

    /// GET `url` with `params` plus the API key and parse the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, LocatorError> {
        log::debug!("Geoapify request: {} {:?}", url, params);

        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("apiKey", &self.api_key)])
            .send()
            .await
            .map_err(|e| {
                log::error!("Geoapify request failed: {}", e);
                LocatorError::upstream(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            log::error!("Geoapify API error {}: {}", status, body);
            return Err(LocatorError::UpstreamError {
                status: Some(status.as_u16()),
                message: format!("API error {}: {}", status, body),
            });
        }

        response.json::<T>().await.map_err(|e| {
            log::error!("Failed to parse Geoapify response: {}", e);
            LocatorError::UpstreamError {
                status: Some(status.as_u16()),
                message: format!("Parse error: {}", e),
            }
        })
    }
}
