//! Request bodies for the LINE Messaging API

use concierge_domain::OutboundMessage;
use serde::Serialize;

/// Quick reply panels accept at most this many buttons
pub(super) const QUICK_REPLY_ITEM_LIMIT: usize = 13;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReplyRequest<'a> {
    pub reply_token: &'a str,
    pub messages: Vec<LineMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct PushRequest<'a> {
    pub to: &'a str,
    pub messages: Vec<LineMessage<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LineMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    quick_reply: Option<QuickReply<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct QuickReply<'a> {
    items: Vec<QuickReplyItem<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct QuickReplyItem<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    action: MessageAction<'a>,
}

/// Tapping the button sends `text` back as a user message
#[derive(Debug, Serialize)]
pub(super) struct MessageAction<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    label: &'a str,
    text: &'a str,
}

impl<'a> From<&'a OutboundMessage> for LineMessage<'a> {
    fn from(message: &'a OutboundMessage) -> Self {
        let quick_reply = match message {
            OutboundMessage::Text { .. } => None,
            OutboundMessage::Choices { choices, .. } => Some(QuickReply {
                items: choices
                    .iter()
                    .take(QUICK_REPLY_ITEM_LIMIT)
                    .map(|label| QuickReplyItem {
                        kind: "action",
                        action: MessageAction {
                            kind: "message",
                            label: label.as_str(),
                            text: label.as_str(),
                        },
                    })
                    .collect(),
            }),
        };

        LineMessage {
            kind: "text",
            text: message.body(),
            quick_reply,
        }
    }
}

pub(super) fn to_line_messages(messages: &[OutboundMessage]) -> Vec<LineMessage<'_>> {
    messages.iter().map(LineMessage::from).collect()
}
