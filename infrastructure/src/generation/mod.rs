//! Description generation adapters

mod openai;

pub use openai::OpenAiDescriptionGenerator;
