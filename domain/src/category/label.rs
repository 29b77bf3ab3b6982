//! Category label value object

use serde::Serialize;

/// A category the user can pick from the menu (Value Object)
///
/// Only [`CategoryMenu`](super::menu::CategoryMenu) hands these out, so every
/// label in circulation is a member of the fixed vocabulary. The label text
/// doubles as the search keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    pub(crate) fn new(label: &str) -> Self {
        Self(label.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Keyword sent to the place search
    pub fn keyword(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
