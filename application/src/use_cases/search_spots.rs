//! Search Spots use case
//!
//! Runs the place search for a consumed category and trims the result to
//! what will actually be shown.

use crate::config::PipelineConfig;
use crate::ports::place_search::{PlaceSearchClient, SearchError};
use concierge_domain::{CategoryLabel, Coordinates, SearchQuery, SpotResult, select_for_display};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a search that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Nothing matched; the pipeline stops here
    Empty,
    /// Ranked spots, at most `display_cap` of them
    Found(Vec<SpotResult>),
}

/// Use case for the search stage of the pipeline
pub struct SearchSpotsUseCase {
    client: Arc<dyn PlaceSearchClient>,
    config: Arc<PipelineConfig>,
}

impl SearchSpotsUseCase {
    pub fn new(client: Arc<dyn PlaceSearchClient>, config: Arc<PipelineConfig>) -> Self {
        Self { client, config }
    }

    /// Search around `coordinates` for `category`.
    ///
    /// The display cap is applied here, before any description is generated.
    pub async fn execute(
        &self,
        coordinates: Coordinates,
        category: &CategoryLabel,
    ) -> Result<SearchOutcome, SearchError> {
        let query = SearchQuery::for_category(
            coordinates,
            category,
            self.config.radius_meters,
            self.config.language.clone(),
        );

        let spots = self.client.search(&query).await?;
        if spots.is_empty() {
            info!(category = %category, "Search returned no spots");
            return Ok(SearchOutcome::Empty);
        }

        let found = spots.len();
        let shown = select_for_display(spots, self.config.ranking, self.config.display_cap);
        debug!(
            category = %category,
            found,
            shown = shown.len(),
            ranking = self.config.ranking.as_str(),
            "Search completed"
        );

        Ok(SearchOutcome::Found(shown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockSearch, spots};
    use concierge_domain::{CategoryMenu, RankingPolicy};

    fn cafe() -> CategoryLabel {
        CategoryMenu::default().select("カフェ").unwrap()
    }

    fn here() -> Coordinates {
        Coordinates::new(35.68, 139.76).unwrap()
    }

    fn names(spots: &[SpotResult]) -> Vec<String> {
        spots.iter().map(|s| s.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_query_built_from_config() {
        let search = Arc::new(MockSearch::returning(spots(1)));
        let config = PipelineConfig::default()
            .with_radius_meters(2500)
            .with_language("en");
        let use_case = SearchSpotsUseCase::new(search.clone(), Arc::new(config));

        use_case.execute(here(), &cafe()).await.unwrap();

        let queries = search.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].keyword, "カフェ");
        assert_eq!(queries[0].radius_meters, 2500);
        assert_eq!(queries[0].language, "en");
        assert_eq!(queries[0].coordinates, here());
    }

    #[tokio::test]
    async fn test_empty_result() {
        let search = Arc::new(MockSearch::returning(vec![]));
        let use_case = SearchSpotsUseCase::new(search, Arc::new(PipelineConfig::default()));

        let outcome = use_case.execute(here(), &cafe()).await.unwrap();
        assert_eq!(outcome, SearchOutcome::Empty);
    }

    #[tokio::test]
    async fn test_truncates_to_display_cap_in_collaborator_order() {
        let search = Arc::new(MockSearch::returning(spots(12)));
        let config = PipelineConfig::default().with_display_cap(10);
        let use_case = SearchSpotsUseCase::new(search, Arc::new(config));

        let SearchOutcome::Found(shown) = use_case.execute(here(), &cafe()).await.unwrap() else {
            panic!("expected spots");
        };
        assert_eq!(shown.len(), 10);
        assert_eq!(names(&shown)[0], "spot-1");
        assert_eq!(names(&shown)[9], "spot-10");
    }

    #[tokio::test]
    async fn test_popularity_ranking_before_cap() {
        let mut results = spots(4);
        results[0].review_count = Some(3);
        results[1].review_count = None;
        results[2].review_count = Some(900);
        results[3].review_count = Some(40);
        let search = Arc::new(MockSearch::returning(results));
        let config = PipelineConfig::default()
            .with_display_cap(2)
            .with_ranking(RankingPolicy::Popularity);
        let use_case = SearchSpotsUseCase::new(search, Arc::new(config));

        let SearchOutcome::Found(shown) = use_case.execute(here(), &cafe()).await.unwrap() else {
            panic!("expected spots");
        };
        assert_eq!(names(&shown), vec!["spot-3", "spot-4"]);
    }

    #[tokio::test]
    async fn test_search_error_propagates() {
        let search = Arc::new(MockSearch::failing(SearchError::Request("down".into())));
        let use_case = SearchSpotsUseCase::new(search, Arc::new(PipelineConfig::default()));

        let err = use_case.execute(here(), &cafe()).await.unwrap_err();
        assert_eq!(err, SearchError::Request("down".into()));
    }
}
