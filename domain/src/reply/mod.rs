//! Outbound replies.
//!
//! - [`message::OutboundMessage`]: what the delivery channel sends
//! - [`message::texts`]: fixed user-visible wording
//! - [`assembler::ReplyAssembler`]: turns a spot plus description into a [`assembler::ReplyItem`]

pub mod assembler;
pub mod message;
