//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod assemble_replies;
pub mod deliver_replies;
pub mod describe_spots;
pub mod handle_event;
pub mod search_spots;
#[cfg(test)]
pub(crate) mod test_support;
