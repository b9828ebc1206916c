// src/services/place_service.rs
// DOCUMENTATION: Nearby services query
// PURPOSE: Fetch, classify and rank service points around a coordinate

use chrono::{Local, NaiveDateTime};

use crate::errors::LocatorError;
use crate::models::{NearbyQuery, ServiceEntry};
use crate::services::normalizer::normalize;
use crate::services::ranking::rank_and_filter;
use crate::services::GeoapifyClient;

pub struct PlaceService;

impl PlaceService {
    /// Query nearby services, evaluated at the current local time
    pub async fn query_places(
        client: &GeoapifyClient,
        query: &NearbyQuery,
    ) -> Result<Vec<ServiceEntry>, LocatorError> {
        Self::query_places_at(client, query, Local::now().naive_local()).await
    }

    /// Query nearby services, evaluating opening hours at `at`
    /// DOCUMENTATION: One provider call; every feature is normalized, then
    /// ranked with closed services removed. Provider failures are returned
    /// as UpstreamError, never as an empty list.
    pub async fn query_places_at(
        client: &GeoapifyClient,
        query: &NearbyQuery,
        at: NaiveDateTime,
    ) -> Result<Vec<ServiceEntry>, LocatorError> {
        let features = client
            .search_places(&query.search_area(), &query.category, query.limit)
            .await?;

        let entries: Vec<ServiceEntry> = features.iter().map(|f| normalize(f, at)).collect();
        let ranked = rank_and_filter(&entries);

        log::info!(
            "Nearby {} at ({}, {}): {} of {} services shown",
            query.category,
            query.lat,
            query.lng,
            ranked.len(),
            entries.len()
        );

        Ok(ranked)
    }
}
