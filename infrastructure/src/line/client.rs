//! HTTP client for the reply and push endpoints

use super::wire::{PushRequest, ReplyRequest, to_line_messages};
use crate::config::{FileLineConfig, require_secret};
use crate::error::AdapterBuildError;
use async_trait::async_trait;
use concierge_application::{DeliveryChannel, DeliveryError};
use concierge_domain::{OutboundMessage, ReplyToken, UserId};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Reply and push both accept at most five messages per request
pub const LINE_MESSAGES_PER_CALL: usize = 5;

const REPLY_PATH: &str = "/v2/bot/message/reply";
const PUSH_PATH: &str = "/v2/bot/message/push";

/// Delivery channel backed by the LINE Messaging API
pub struct LineMessagingClient {
    http: reqwest::Client,
    channel_access_token: String,
    api_base: String,
}

impl LineMessagingClient {
    pub fn new(
        http: reqwest::Client,
        channel_access_token: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            http,
            channel_access_token: channel_access_token.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build from the `[line]` section
    pub fn from_config(config: &FileLineConfig) -> Result<Self, AdapterBuildError> {
        let token = require_secret("line.channel_access_token", &config.channel_access_token)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self::new(http, token, config.api_base.clone()))
    }

    fn check_count(messages: &[OutboundMessage]) -> Result<(), DeliveryError> {
        if messages.len() > LINE_MESSAGES_PER_CALL {
            return Err(DeliveryError::TooManyMessages {
                count: messages.len(),
                limit: LINE_MESSAGES_PER_CALL,
            });
        }
        Ok(())
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), DeliveryError> {
        let response = self
            .http
            .post(format!("{}{}", self.api_base, path))
            .bearer_auth(&self.channel_access_token)
            .json(body)
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        debug!(path, status = status.as_u16(), "LINE request accepted");
        Ok(())
    }
}

#[async_trait]
impl DeliveryChannel for LineMessagingClient {
    async fn reply(
        &self,
        reply_token: ReplyToken,
        messages: &[OutboundMessage],
    ) -> Result<(), DeliveryError> {
        Self::check_count(messages)?;
        let body = ReplyRequest {
            reply_token: reply_token.as_str(),
            messages: to_line_messages(messages),
        };
        self.post(REPLY_PATH, &body).await
    }

    async fn push(
        &self,
        user_id: &UserId,
        messages: &[OutboundMessage],
    ) -> Result<(), DeliveryError> {
        Self::check_count(messages)?;
        let body = PushRequest {
            to: user_id.as_str(),
            messages: to_line_messages(messages),
        };
        self.post(PUSH_PATH, &body).await
    }
}
