//! Webhook payload decoding

use concierge_domain::{Coordinates, InboundEvent, ReplyToken, UserId};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Body of a webhook request
///
/// Events stay as raw JSON here so that one unexpected event does not
/// make the whole delivery unreadable.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: Option<String>,
    pub events: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebhookEvent {
    #[serde(rename = "type")]
    kind: String,
    reply_token: Option<String>,
    source: Option<EventSource>,
    message: Option<MessageBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventSource {
    user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum MessageBody {
    Text {
        text: String,
    },
    Location {
        latitude: f64,
        longitude: f64,
    },
    #[serde(other)]
    Other,
}

/// Why a webhook event did not become an inbound event
#[derive(Debug, Error, PartialEq)]
pub enum SkippedEvent {
    #[error("unreadable event: {0}")]
    Unreadable(String),

    #[error("event type {0} is not handled")]
    NotAMessage(String),

    #[error("message type is not handled")]
    UnsupportedMessage,

    #[error("event has no {0}")]
    Missing(&'static str),

    #[error("invalid event field: {0}")]
    Invalid(String),
}

/// Decode a single webhook event
pub fn decode_event(raw: Value) -> Result<InboundEvent, SkippedEvent> {
    let event: WebhookEvent =
        serde_json::from_value(raw).map_err(|e| SkippedEvent::Unreadable(e.to_string()))?;

    if event.kind != "message" {
        return Err(SkippedEvent::NotAMessage(event.kind));
    }

    let message = event.message.ok_or(SkippedEvent::Missing("message"))?;
    if matches!(message, MessageBody::Other) {
        return Err(SkippedEvent::UnsupportedMessage);
    }

    let user_id = event
        .source
        .and_then(|s| s.user_id)
        .ok_or(SkippedEvent::Missing("source.userId"))?;
    let user_id = UserId::new(user_id).map_err(|e| SkippedEvent::Invalid(e.to_string()))?;

    let reply_token = event
        .reply_token
        .ok_or(SkippedEvent::Missing("replyToken"))?;
    let reply_token =
        ReplyToken::new(reply_token).map_err(|e| SkippedEvent::Invalid(e.to_string()))?;

    match message {
        MessageBody::Text { text } => Ok(InboundEvent::Text {
            user_id,
            reply_token,
            text,
        }),
        MessageBody::Location {
            latitude,
            longitude,
        } => match Coordinates::new(latitude, longitude) {
            Ok(coordinates) => Ok(InboundEvent::Location {
                user_id,
                reply_token,
                coordinates,
            }),
            // Still answered, so the user learns to resend
            Err(e) => {
                debug!(error = %e, "Location message has unusable coordinates");
                Ok(InboundEvent::UnusableLocation {
                    user_id,
                    reply_token,
                })
            }
        },
        MessageBody::Other => Err(SkippedEvent::UnsupportedMessage),
    }
}

/// Decode every handled event in delivery order, skipping the rest
pub fn decode_events(payload: WebhookPayload) -> Vec<InboundEvent> {
    payload
        .events
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match decode_event(raw) {
            Ok(event) => Some(event),
            Err(reason) => {
                debug!(index, %reason, "Skipping webhook event");
                None
            }
        })
        .collect()
}
