//! Google Places Nearby Search adapter
//!
//! Nearby Search returns at most 20 places per page and a `next_page_token`
//! for the next page. The token only becomes valid after a short delay, so
//! follow-up pages are requested after `page_delay`, up to `max_pages` pages
//! in total. None of this leaks out of the adapter: callers see one list.

use super::wire::{NearbySearchResponse, STATUS_OK, STATUS_ZERO_RESULTS};
use crate::config::{FilePlacesConfig, require_secret};
use crate::error::AdapterBuildError;
use async_trait::async_trait;
use concierge_application::{PlaceSearchClient, SearchError};
use concierge_domain::{SearchQuery, SpotResult};
use std::time::Duration;
use tracing::{debug, warn};

/// Place search backed by the Google Places Nearby Search API
pub struct GooglePlacesClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    max_pages: usize,
    page_delay: Duration,
}

impl GooglePlacesClient {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let defaults = FilePlacesConfig::default();
        Self {
            http,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            max_pages: defaults.max_pages,
            page_delay: Duration::from_millis(defaults.page_delay_ms),
        }
    }

    /// Build from the `[places]` section
    pub fn from_config(config: &FilePlacesConfig) -> Result<Self, AdapterBuildError> {
        let api_key = require_secret("places.api_key", &config.api_key)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self::new(http, api_key, config.endpoint.clone())
            .with_max_pages(config.max_pages)
            .with_page_delay(Duration::from_millis(config.page_delay_ms)))
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page_token: Option<&str>,
    ) -> Result<NearbySearchResponse, SearchError> {
        let request = match page_token {
            Some(token) => self
                .http
                .get(&self.endpoint)
                .query(&[("pagetoken", token), ("key", self.api_key.as_str())]),
            None => self.http.get(&self.endpoint).query(&[
                ("location", query.coordinates.to_string()),
                ("radius", query.radius_meters.to_string()),
                ("keyword", query.keyword.clone()),
                ("language", query.language.clone()),
                ("key", self.api_key.clone()),
            ]),
        };

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Status {
                status: response.status().to_string(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        response
            .json::<NearbySearchResponse>()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl PlaceSearchClient for GooglePlacesClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SpotResult>, SearchError> {
        let mut spots = Vec::new();
        let mut page_token: Option<String> = None;

        for page in 0..self.max_pages {
            if page > 0 {
                tokio::time::sleep(self.page_delay).await;
            }

            let fetched = self.fetch_page(query, page_token.as_deref()).await;
            let response = match fetched {
                Ok(response) => response,
                // Later pages are best effort once the first page is in hand.
                Err(e) if page > 0 => {
                    warn!(page, error = %e, "Follow-up page failed, keeping earlier results");
                    break;
                }
                Err(e) => return Err(e),
            };

            match response.status.as_str() {
                STATUS_OK => {}
                STATUS_ZERO_RESULTS => break,
                status if page > 0 => {
                    warn!(page, status, "Follow-up page rejected, keeping earlier results");
                    break;
                }
                status => {
                    return Err(SearchError::Status {
                        status: status.to_string(),
                        message: response.error_message.unwrap_or_default(),
                    });
                }
            }

            let before = spots.len();
            spots.extend(response.results.into_iter().filter_map(|place| place.into_spot()));
            debug!(page, added = spots.len() - before, keyword = %query.keyword, "Fetched result page");

            match response.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(spots)
    }
}
