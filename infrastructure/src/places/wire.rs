//! Google Places Nearby Search response format

use concierge_domain::{Coordinates, SpotResult};
use serde::Deserialize;

pub(super) const STATUS_OK: &str = "OK";
pub(super) const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

const UNKNOWN_NAME: &str = "名称不明";
const UNKNOWN_ADDRESS: &str = "住所不明";

#[derive(Debug, Deserialize)]
pub(super) struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PlaceResult {
    pub name: Option<String>,
    pub vicinity: Option<String>,
    pub geometry: Option<Geometry>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub(super) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl PlaceResult {
    /// `None` when the place has no usable location
    pub fn into_spot(self) -> Option<SpotResult> {
        let location = self.geometry?.location;
        let coordinates = Coordinates::new(location.lat, location.lng).ok()?;

        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let address = self
            .vicinity
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string());

        let mut spot = SpotResult::new(name, address, coordinates);
        spot.rating = self.rating;
        spot.review_count = self.user_ratings_total;
        Some(spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_result() {
        let json = r#"{
            "status": "OK",
            "next_page_token": "tok",
            "results": [{
                "name": "喫茶ランプ",
                "vicinity": "京都市中京区",
                "geometry": {"location": {"lat": 35.01, "lng": 135.76}},
                "rating": 4.4,
                "user_ratings_total": 321,
                "place_id": "ignored"
            }]
        }"#;
        let response: NearbySearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.next_page_token.as_deref(), Some("tok"));

        let spot = response.results.into_iter().next().unwrap().into_spot().unwrap();
        assert_eq!(spot.name, "喫茶ランプ");
        assert_eq!(spot.address, "京都市中京区");
        assert_eq!(spot.coordinates, Coordinates::new(35.01, 135.76).unwrap());
        assert_eq!(spot.rating, Some(4.4));
        assert_eq!(spot.review_count, Some(321));
    }

    #[test]
    fn test_missing_name_and_address_use_placeholders() {
        let json = r#"{"geometry": {"location": {"lat": 1.0, "lng": 2.0}}}"#;
        let place: PlaceResult = serde_json::from_str(json).unwrap();
        let spot = place.into_spot().unwrap();
        assert_eq!(spot.name, "名称不明");
        assert_eq!(spot.address, "住所不明");
        assert_eq!(spot.rating, None);
    }

    #[test]
    fn test_missing_geometry_is_dropped() {
        let place: PlaceResult = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert!(place.into_spot().is_none());
    }

    #[test]
    fn test_error_status_body() {
        let json = r#"{"status": "REQUEST_DENIED", "error_message": "bad key", "results": []}"#;
        let response: NearbySearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "REQUEST_DENIED");
        assert_eq!(response.error_message.as_deref(), Some("bad key"));
    }
}
