//! Reply assembly for search results

use super::message::OutboundMessage;
use crate::core::geo::Coordinates;
use crate::search::value_objects::SpotResult;
use serde::Serialize;

/// Map search URL; the query parameter takes `lat,lng`.
const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Deterministic map link for a coordinate pair
pub fn map_link(coordinates: &Coordinates) -> String {
    format!("{MAP_SEARCH_URL}{coordinates}")
}

/// One formatted search result, ready for delivery (Value Object)
///
/// Immutable once built; the text is the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyItem {
    text: String,
}

impl ReplyItem {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_message(self) -> OutboundMessage {
        OutboundMessage::Text { text: self.text }
    }
}

impl From<ReplyItem> for OutboundMessage {
    fn from(item: ReplyItem) -> Self {
        item.into_message()
    }
}

/// Formats a spot and its description into a [`ReplyItem`]
pub struct ReplyAssembler;

impl ReplyAssembler {
    /// `description` is either the generated text or the fallback sentence;
    /// the assembler does not distinguish the two.
    pub fn assemble(spot: &SpotResult, description: &str) -> ReplyItem {
        let mut text = format!("🏞️ {}\n📍 {}", spot.name, spot.address);

        if let Some(rating) = spot.rating {
            text.push_str(&format!("\n⭐ {rating:.1}"));
            if let Some(count) = spot.review_count {
                text.push_str(&format!(" ({count}件)"));
            }
        }

        text.push_str(&format!(
            "\n\n{}\n\n👉 Googleマップで見る\n{}",
            description.trim(),
            map_link(&spot.coordinates)
        ));

        ReplyItem { text }
    }
}
