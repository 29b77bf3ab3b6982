//! Per-user conversation state.
//!
//! The only thing remembered between events is the category a user picked
//! and has not yet spent on a search.

use crate::category::label::CategoryLabel;

/// Where a user stands in the two-step conversation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationState {
    /// No pending category; a location event is answered with instructions
    #[default]
    Idle,
    /// A category was picked and authorizes exactly one search
    CategorySelected(CategoryLabel),
}

impl ConversationState {
    pub fn from_pending(pending: Option<CategoryLabel>) -> Self {
        match pending {
            Some(label) => ConversationState::CategorySelected(label),
            None => ConversationState::Idle,
        }
    }

    pub fn pending(&self) -> Option<&CategoryLabel> {
        match self {
            ConversationState::Idle => None,
            ConversationState::CategorySelected(label) => Some(label),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::CategorySelected(_) => "category_selected",
        }
    }
}
