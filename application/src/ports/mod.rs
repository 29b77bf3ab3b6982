//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod delivery_channel;
pub mod description_generator;
pub mod place_search;
pub mod session_store;
