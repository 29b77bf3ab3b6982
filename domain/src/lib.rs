//! Domain layer for spot-concierge
//!
//! This crate contains the value objects and pure policies of the
//! conversational spot search. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Two-step conversation
//!
//! A user first picks a [`CategoryLabel`] from the fixed [`CategoryMenu`], then
//! shares a location. The location event turns into a [`SearchQuery`]; each
//! [`SpotResult`] becomes a [`ReplyItem`] through the [`ReplyAssembler`].
//!
//! ## Channel limits
//!
//! The messaging channel caps items per call and allows one direct reply per
//! event. [`plan_batches`] decides which items go in the reply and which are
//! pushed afterwards.

pub mod category;
pub mod core;
pub mod delivery;
pub mod event;
pub mod prompt;
pub mod reply;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use category::{
    label::CategoryLabel,
    menu::{CategoryMenu, DEFAULT_CATEGORY_LABELS},
};
pub use core::{
    error::DomainError,
    geo::Coordinates,
    identity::{ReplyToken, UserId},
    string::preview,
};
pub use delivery::batch::{BatchSize, BatchTarget, DeliveryBatch, plan_batches};
pub use event::InboundEvent;
pub use prompt::DescriptionPrompt;
pub use reply::{
    assembler::{ReplyAssembler, ReplyItem, map_link},
    message::{OutboundMessage, texts},
};
pub use search::{
    ranking::{RankingPolicy, select_for_display},
    value_objects::{SearchQuery, SpotResult},
};
pub use session::ConversationState;
