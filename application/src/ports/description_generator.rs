//! Description generator port
//!
//! Produces a short descriptive sentence for a spot from a prompt.

use async_trait::async_trait;
use concierge_domain::DescriptionPrompt;
use std::time::Duration;
use thiserror::Error;

/// Reasons a description could not be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Generation request failed: {0}")]
    Request(String),

    #[error("Malformed generation response: {0}")]
    Malformed(String),

    #[error("Generation returned no text")]
    EmptyOutput,
}

/// Port for text generation
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn generate(&self, prompt: &DescriptionPrompt) -> Result<String, DescriptionError>;
}
