//! Errors raised while wiring adapters from configuration

use crate::config::ConfigValidationError;
use thiserror::Error;

/// Errors that can occur when building an adapter
#[derive(Error, Debug)]
pub enum AdapterBuildError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigValidationError),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
