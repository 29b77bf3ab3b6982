//! Core domain concepts shared across all subdomains.
//!
//! - [`identity::UserId`] / [`identity::ReplyToken`]: who sent an event and how to answer it
//! - [`geo::Coordinates`]: a validated latitude/longitude pair
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod geo;
pub mod identity;
pub mod string;
