//! axum routes for the webhook

use super::payload::{WebhookPayload, decode_events};
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use concierge_application::ConversationHandler;
use std::sync::Arc;
use tracing::{debug, warn};

/// Build the webhook router around a conversation handler
pub fn router(handler: Arc<ConversationHandler>) -> Router {
    Router::new()
        .route("/callback", post(callback))
        .route("/health", get(health))
        .with_state(handler)
}

/// Handle every event in the delivery before acknowledging it
///
/// Events run one after another so that a selection followed by a location
/// from the same user in one delivery is seen in that order.
async fn callback(
    State(handler): State<Arc<ConversationHandler>>,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, bytes = body.len(), "Rejecting malformed webhook body");
            return (StatusCode::BAD_REQUEST, "invalid payload");
        }
    };

    let received = payload.events.len();
    let events = decode_events(payload);
    debug!(received, handled = events.len(), "Webhook delivery decoded");

    for event in events {
        handler.handle(event).await;
    }

    (StatusCode::OK, "OK")
}

async fn health() -> &'static str {
    "ok"
}
