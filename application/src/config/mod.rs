//! Application-level configuration.
//!
//! - [`PipelineConfig`]: deployment constants for the search → describe → deliver pipeline

pub mod pipeline;

pub use pipeline::PipelineConfig;
