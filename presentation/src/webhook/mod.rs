//! LINE webhook endpoint
//!
//! [`payload`] turns the JSON body LINE posts into [`InboundEvent`]s;
//! [`routes`] exposes `POST /callback` and `GET /health`.
//!
//! [`InboundEvent`]: concierge_domain::InboundEvent

mod payload;
mod routes;

pub use payload::{SkippedEvent, WebhookPayload, decode_event, decode_events};
pub use routes::router;
