//! Pipeline parameters: search, description and delivery limits.
//!
//! [`PipelineConfig`] groups the fixed constants of a deployment. They are
//! application-layer concerns: the domain only sees the resulting values.

use concierge_domain::{BatchSize, RankingPolicy};
use std::time::Duration;

/// LINE accepts at most five messages per reply or push call.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Search, description and delivery parameters.
///
/// Constructed once at startup from the loaded configuration and shared by
/// every request.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Search radius around the shared location.
    pub radius_meters: u32,
    /// Language requested from the search service.
    pub language: String,
    /// Maximum spots carried into description generation and delivery.
    pub display_cap: usize,
    /// Maximum items per delivery call.
    pub batch_size: BatchSize,
    /// Ordering applied before the display cap.
    pub ranking: RankingPolicy,
    /// Descriptions generated at the same time.
    pub description_concurrency: usize,
    /// Per-call limit for description generation; `None` waits indefinitely.
    pub description_timeout: Option<Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            radius_meters: 10_000,
            language: "ja".to_string(),
            display_cap: 10,
            batch_size: BatchSize::at_least_one(DEFAULT_BATCH_SIZE),
            ranking: RankingPolicy::default(),
            description_concurrency: 4,
            description_timeout: Some(Duration::from_secs(15)),
        }
    }
}

impl PipelineConfig {
    // ==================== Builder Methods ====================

    pub fn with_radius_meters(mut self, radius: u32) -> Self {
        self.radius_meters = radius;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// A cap of zero is raised to one: at least one spot is always shown.
    pub fn with_display_cap(mut self, cap: usize) -> Self {
        self.display_cap = cap.max(1);
        self
    }

    pub fn with_batch_size(mut self, size: BatchSize) -> Self {
        self.batch_size = size;
        self
    }

    pub fn with_ranking(mut self, ranking: RankingPolicy) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_description_concurrency(mut self, concurrency: usize) -> Self {
        self.description_concurrency = concurrency.max(1);
        self
    }

    pub fn with_description_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.description_timeout = timeout;
        self
    }
}
