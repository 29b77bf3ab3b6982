//! Describe Spots use case
//!
//! Asks the description generator for one short text per spot. Each call is
//! tried once; failures are returned per spot, never raised for the batch.

use crate::config::PipelineConfig;
use crate::ports::description_generator::{DescriptionError, DescriptionGenerator};
use concierge_domain::{CategoryLabel, DescriptionPrompt, SpotResult};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::debug;

/// Generated text for one spot, or why there is none
pub type DescriptionOutcome = Result<String, DescriptionError>;

/// Use case for the description stage of the pipeline
pub struct DescribeSpotsUseCase {
    generator: Arc<dyn DescriptionGenerator>,
    config: Arc<PipelineConfig>,
}

impl DescribeSpotsUseCase {
    pub fn new(generator: Arc<dyn DescriptionGenerator>, config: Arc<PipelineConfig>) -> Self {
        Self { generator, config }
    }

    /// One outcome per spot, in the same order as `spots`.
    ///
    /// Up to `description_concurrency` generations run at once; the buffered
    /// stream yields results in input order regardless of completion order.
    pub async fn execute(
        &self,
        spots: &[SpotResult],
        category: &CategoryLabel,
    ) -> Vec<DescriptionOutcome> {
        // Built up front: a borrowing closure inside the stream would make
        // the returned future non-Send.
        let pending: Vec<_> = spots
            .iter()
            .map(|spot| self.describe_one(spot, category))
            .collect();

        stream::iter(pending)
            .buffered(self.config.description_concurrency.max(1))
            .collect()
            .await
    }

    async fn describe_one(
        &self,
        spot: &SpotResult,
        category: &CategoryLabel,
    ) -> DescriptionOutcome {
        let prompt = DescriptionPrompt::for_spot(&spot.name, category);

        let generated = match self.config.description_timeout {
            Some(limit) => tokio::time::timeout(limit, self.generator.generate(&prompt))
                .await
                .unwrap_or(Err(DescriptionError::Timeout(limit))),
            None => self.generator.generate(&prompt).await,
        };

        let text = generated?;
        let text = text.trim();
        if text.is_empty() {
            return Err(DescriptionError::EmptyOutput);
        }

        debug!(spot = %spot.name, chars = text.chars().count(), "Description generated");
        Ok(text.to_string())
    }
}
