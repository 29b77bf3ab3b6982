//! Delivery batching.
//!
//! The messaging channel accepts a bounded number of items per call and
//! allows only one direct reply per inbound event. [`batch::plan_batches`]
//! turns an item sequence into the ordered list of calls to make.

pub mod batch;
