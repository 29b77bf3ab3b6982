//! Presentation layer for spot-concierge
//!
//! This crate contains the CLI definition and the HTTP surface: the LINE
//! webhook payload decoding and the axum router that feeds decoded events
//! to the conversation handler.

pub mod cli;
pub mod webhook;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use webhook::{SkippedEvent, WebhookPayload, decode_event, decode_events, router};
