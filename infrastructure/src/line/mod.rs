//! LINE Messaging API delivery channel

mod client;
mod wire;

pub use client::{LINE_MESSAGES_PER_CALL, LineMessagingClient};
