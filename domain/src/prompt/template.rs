//! Prompt template for spot descriptions

use crate::category::label::CategoryLabel;

/// Soft length target stated in the prompt. The generator is not held to it.
pub const DESCRIPTION_TARGET_CHARS: usize = 100;

/// A prompt asking for a short, friendly description of one spot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionPrompt {
    text: String,
}

impl DescriptionPrompt {
    /// Build the tour-guide prompt embedding the spot name and category
    pub fn for_spot(name: &str, category: &CategoryLabel) -> Self {
        let text = format!(
            r#"あなたは観光案内人です。以下のスポットを旅行者におすすめするとしたら、どう紹介しますか？

名称：{name}
ジャンル：{category}

場所の特徴や雰囲気、旅行者が嬉しいポイントを含めて、{DESCRIPTION_TARGET_CHARS}文字以内でやさしい案内文をお願いします。"#
        );
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for DescriptionPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::menu::CategoryMenu;

    #[test]
    fn test_prompt_embeds_name_and_category() {
        let cafe = CategoryMenu::default().select("カフェ").unwrap();
        let prompt = DescriptionPrompt::for_spot("喫茶ランプ", &cafe);

        assert!(prompt.as_str().contains("名称：喫茶ランプ"));
        assert!(prompt.as_str().contains("ジャンル：カフェ"));
        assert!(prompt.as_str().contains("100文字以内"));
    }
}
