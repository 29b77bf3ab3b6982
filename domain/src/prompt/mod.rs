//! Prompt construction for description generation.
//!
//! - [`template::DescriptionPrompt`]: the tour-guide prompt for one spot

pub mod template;

pub use template::DescriptionPrompt;
