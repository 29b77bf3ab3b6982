//! Delivery channel port
//!
//! Sends messages back to the user, either as the direct reply to an event
//! or as a push.

use async_trait::async_trait;
use concierge_domain::{OutboundMessage, ReplyToken, UserId};
use thiserror::Error;

/// Errors that can occur while delivering messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Delivery request failed: {0}")]
    Request(String),

    #[error("Delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Too many messages for one call: {count} (limit {limit})")]
    TooManyMessages { count: usize, limit: usize },
}

/// Port for the messaging channel
///
/// Both calls accept at most the channel's batch size per call. The caller
/// is responsible for chunking.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Answer an inbound event. The token is spent by this call.
    async fn reply(
        &self,
        reply_token: ReplyToken,
        messages: &[OutboundMessage],
    ) -> Result<(), DeliveryError>;

    /// Send messages to a user outside of any reply
    async fn push(&self, user_id: &UserId, messages: &[OutboundMessage])
    -> Result<(), DeliveryError>;
}
