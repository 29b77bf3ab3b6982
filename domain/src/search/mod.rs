//! Place search domain.
//!
//! - [`value_objects::SearchQuery`]: what to ask the search collaborator
//! - [`value_objects::SpotResult`]: one place it returned
//! - [`ranking::RankingPolicy`]: ordering applied before the display cap

pub mod ranking;
pub mod value_objects;
