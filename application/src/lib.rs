//! Application layer for spot-concierge
//!
//! This crate contains use cases, port definitions, and pipeline configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use ports::{
    delivery_channel::{DeliveryChannel, DeliveryError},
    description_generator::{DescriptionError, DescriptionGenerator},
    place_search::{PlaceSearchClient, SearchError},
    session_store::{SessionStore, SessionStoreError},
};
pub use use_cases::assemble_replies::assemble_replies;
pub use use_cases::deliver_replies::{DeliveryReport, DeliveryScheduler};
pub use use_cases::describe_spots::{DescribeSpotsUseCase, DescriptionOutcome};
pub use use_cases::handle_event::{ConversationHandler, HandleOutcome};
pub use use_cases::search_spots::{SearchOutcome, SearchSpotsUseCase};
