//! Selectable search categories.
//!
//! - [`label::CategoryLabel`]: one member of the fixed vocabulary
//! - [`menu::CategoryMenu`]: the ordered vocabulary and selection matching

pub mod label;
pub mod menu;
