//! Fixed category vocabulary

use super::label::CategoryLabel;

/// Labels offered to the user, in menu order.
pub const DEFAULT_CATEGORY_LABELS: [&str; 10] = [
    "トイレ",
    "駐車場",
    "飲食店",
    "カフェ",
    "ホテル",
    "観光地",
    "温泉",
    "遊び場",
    "コンビニ",
    "駅",
];

/// The ordered, closed set of selectable categories
///
/// Built once at startup; the vocabulary cannot grow at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMenu {
    labels: Vec<CategoryLabel>,
}

impl Default for CategoryMenu {
    fn default() -> Self {
        Self::from_static(&DEFAULT_CATEGORY_LABELS)
    }
}

impl CategoryMenu {
    /// Build a menu from a constant label list, keeping its order.
    ///
    /// Duplicate and blank entries are skipped.
    pub fn from_static(labels: &[&'static str]) -> Self {
        let mut unique: Vec<CategoryLabel> = Vec::with_capacity(labels.len());
        for raw in labels {
            let raw = raw.trim();
            if raw.is_empty() || unique.iter().any(|l| l.as_str() == raw) {
                continue;
            }
            unique.push(CategoryLabel::new(raw));
        }
        Self { labels: unique }
    }

    /// Match free text against the vocabulary (exact, after trimming)
    pub fn select(&self, text: &str) -> Option<CategoryLabel> {
        let text = text.trim();
        self.labels.iter().find(|l| l.as_str() == text).cloned()
    }

    pub fn labels(&self) -> &[CategoryLabel] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
