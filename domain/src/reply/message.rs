//! Outbound message types and fixed wording

use crate::category::label::CategoryLabel;
use crate::category::menu::CategoryMenu;
use serde::Serialize;

/// A message handed to the delivery channel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Plain text
    Text { text: String },
    /// Text followed by one tappable choice per label
    Choices {
        text: String,
        choices: Vec<CategoryLabel>,
    },
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        OutboundMessage::Text { text: text.into() }
    }

    /// The full category menu as a structured choice list
    pub fn category_menu(menu: &CategoryMenu) -> Self {
        OutboundMessage::Choices {
            text: texts::MENU_PROMPT.to_string(),
            choices: menu.labels().to_vec(),
        }
    }

    pub fn body(&self) -> &str {
        match self {
            OutboundMessage::Text { text } | OutboundMessage::Choices { text, .. } => text,
        }
    }
}

/// User-visible wording
pub mod texts {
    use crate::category::label::CategoryLabel;

    pub const MENU_PROMPT: &str = "👇 探したいジャンルを選んでください";
    pub const SESSION_MISSING: &str = "先にジャンルを選んでください。";
    pub const LOCATION_UNUSABLE: &str =
        "位置情報を読み取れませんでした。もう一度現在地を送信してください。";
    pub const SEARCH_FAILED: &str =
        "検索中にエラーが発生しました。もう一度ジャンルを選んでください。";
    pub const STORE_UNAVAILABLE: &str =
        "ただいま処理できませんでした。しばらくしてからもう一度お試しください。";
    /// Substituted for a description that could not be generated
    pub const DESCRIPTION_FALLBACK: &str = "旅行者におすすめのスポットです！";

    pub fn confirmation(category: &CategoryLabel) -> String {
        format!("📍「{category}」を探します！\n現在地を送信してください。")
    }

    pub fn not_found(category: &CategoryLabel) -> String {
        format!("{category}が近くに見つかりませんでした。")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_menu_lists_every_label_in_order() {
        let menu = CategoryMenu::default();
        let message = OutboundMessage::category_menu(&menu);

        match &message {
            OutboundMessage::Choices { text, choices } => {
                assert_eq!(text, texts::MENU_PROMPT);
                assert_eq!(choices.as_slice(), menu.labels());
            }
            other => panic!("expected choices, got {other:?}"),
        }
        assert_eq!(message.body(), texts::MENU_PROMPT);
    }

    #[test]
    fn test_confirmation_and_not_found_wording() {
        let hotel = CategoryMenu::default().select("ホテル").unwrap();
        assert_eq!(
            texts::confirmation(&hotel),
            "📍「ホテル」を探します！\n現在地を送信してください。"
        );
        assert_eq!(texts::not_found(&hotel), "ホテルが近くに見つかりませんでした。");
    }
}
