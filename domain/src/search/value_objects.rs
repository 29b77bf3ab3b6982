//! Search value objects

use crate::category::label::CategoryLabel;
use crate::core::geo::Coordinates;
use serde::Serialize;

/// A geocoded keyword search (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub coordinates: Coordinates,
    pub radius_meters: u32,
    pub keyword: String,
    /// Result language, e.g. `ja`
    pub language: String,
}

impl SearchQuery {
    pub fn for_category(
        coordinates: Coordinates,
        category: &CategoryLabel,
        radius_meters: u32,
        language: impl Into<String>,
    ) -> Self {
        Self {
            coordinates,
            radius_meters,
            keyword: category.keyword().to_string(),
            language: language.into(),
        }
    }
}

/// A place returned by the search collaborator (Value Object)
///
/// Ephemeral: lives only for the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotResult {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
}

impl SpotResult {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            coordinates,
            rating: None,
            review_count: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_review_count(mut self, count: u32) -> Self {
        self.review_count = Some(count);
        self
    }
}
