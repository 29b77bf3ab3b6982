//! Place search adapters

mod google;
mod wire;

pub use google::GooglePlacesClient;
