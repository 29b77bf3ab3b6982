//! Delivery scheduling
//!
//! Splits outbound messages into channel-sized batches and sends them in
//! order: the first batch answers the event, the rest are pushed.

use crate::ports::delivery_channel::DeliveryChannel;
use concierge_domain::{BatchSize, BatchTarget, OutboundMessage, ReplyToken, UserId, plan_batches};
use std::sync::Arc;
use tracing::{debug, error};

/// What happened to one dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Delivery calls attempted
    pub calls: usize,
    /// Calls that failed
    pub failed: usize,
    /// Messages in the successful calls
    pub delivered_messages: usize,
}

impl DeliveryReport {
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Sends message sequences through a [`DeliveryChannel`] within its batch limit
pub struct DeliveryScheduler {
    channel: Arc<dyn DeliveryChannel>,
    batch_size: BatchSize,
}

impl DeliveryScheduler {
    pub fn new(channel: Arc<dyn DeliveryChannel>, batch_size: BatchSize) -> Self {
        Self {
            channel,
            batch_size,
        }
    }

    /// Deliver `messages` as `ceil(n / batch_size)` calls, in order.
    ///
    /// A failed call is logged and the remaining batches are still sent.
    /// Nothing is retried.
    pub async fn dispatch(
        &self,
        reply_token: ReplyToken,
        user_id: &UserId,
        messages: Vec<OutboundMessage>,
    ) -> DeliveryReport {
        let mut report = DeliveryReport::default();
        let mut reply_token = Some(reply_token);

        for batch in plan_batches(messages, self.batch_size) {
            report.calls += 1;
            let count = batch.items.len();

            let result = match (batch.target, reply_token.take()) {
                (BatchTarget::Reply, Some(token)) => self.channel.reply(token, &batch.items).await,
                _ => self.channel.push(user_id, &batch.items).await,
            };

            match result {
                Ok(()) => {
                    report.delivered_messages += count;
                    debug!(
                        user_id = %user_id,
                        chunk = batch.index,
                        target = batch.target.as_str(),
                        messages = count,
                        "Delivered batch"
                    );
                }
                Err(e) => {
                    report.failed += 1;
                    error!(
                        user_id = %user_id,
                        chunk = batch.index,
                        target = batch.target.as_str(),
                        messages = count,
                        error = %e,
                        "Delivery failed"
                    );
                }
            }
        }

        report
    }

    /// Answer an event with a single message
    pub async fn reply_with(
        &self,
        reply_token: ReplyToken,
        user_id: &UserId,
        message: OutboundMessage,
    ) -> DeliveryReport {
        self.dispatch(reply_token, user_id, vec![message]).await
    }
}
