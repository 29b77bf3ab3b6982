//! Infrastructure layer for spot-concierge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading:
//!
//! - [`GooglePlacesClient`] - nearby search with bounded pagination
//! - [`OpenAiDescriptionGenerator`] - chat completions for spot descriptions
//! - [`LineMessagingClient`] - reply and push delivery with quick replies
//! - [`InMemorySessionStore`] - per-user pending category, process local

pub mod config;
pub mod error;
pub mod generation;
pub mod line;
pub mod places;
pub mod session;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeneratorConfig, FileLineConfig,
    FilePipelineConfig, FilePlacesConfig, FileServerConfig,
};
pub use error::AdapterBuildError;
pub use generation::OpenAiDescriptionGenerator;
pub use line::{LINE_MESSAGES_PER_CALL, LineMessagingClient};
pub use places::GooglePlacesClient;
pub use session::InMemorySessionStore;
