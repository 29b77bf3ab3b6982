//! Inbound chat events

use crate::core::geo::Coordinates;
use crate::core::identity::{ReplyToken, UserId};

/// An event delivered by the transport, already decoded and validated
#[derive(Debug, PartialEq)]
pub enum InboundEvent {
    /// The user typed (or tapped) some text
    Text {
        user_id: UserId,
        reply_token: ReplyToken,
        text: String,
    },
    /// The user shared a location
    Location {
        user_id: UserId,
        reply_token: ReplyToken,
        coordinates: Coordinates,
    },
    /// The user shared a location the transport could not turn into
    /// valid coordinates
    UnusableLocation {
        user_id: UserId,
        reply_token: ReplyToken,
    },
}

impl InboundEvent {
    pub fn user_id(&self) -> &UserId {
        match self {
            InboundEvent::Text { user_id, .. }
            | InboundEvent::Location { user_id, .. }
            | InboundEvent::UnusableLocation { user_id, .. } => user_id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Text { .. } => "text",
            InboundEvent::Location { .. } => "location",
            InboundEvent::UnusableLocation { .. } => "unusable_location",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let event = InboundEvent::Location {
            user_id: UserId::new("U1").unwrap(),
            reply_token: ReplyToken::new("rt").unwrap(),
            coordinates: Coordinates::new(1.0, 2.0).unwrap(),
        };
        assert_eq!(event.user_id().as_str(), "U1");
        assert_eq!(event.kind(), "location");
    }
}
