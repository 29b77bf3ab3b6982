//! Hand-written port doubles shared by the use case tests.

use crate::ports::delivery_channel::{DeliveryChannel, DeliveryError};
use crate::ports::description_generator::{DescriptionError, DescriptionGenerator};
use crate::ports::place_search::{PlaceSearchClient, SearchError};
use crate::ports::session_store::{SessionStore, SessionStoreError};
use async_trait::async_trait;
use concierge_domain::{
    BatchTarget, CategoryLabel, Coordinates, DescriptionPrompt, OutboundMessage, ReplyToken,
    SearchQuery, SpotResult, UserId,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub fn token(id: &str) -> ReplyToken {
    ReplyToken::new(id).unwrap()
}

/// `count` spots named `spot-1`, `spot-2`, … at distinct coordinates
pub fn spots(count: usize) -> Vec<SpotResult> {
    (1..=count)
        .map(|i| {
            SpotResult::new(
                format!("spot-{i}"),
                format!("address-{i}"),
                Coordinates::new(35.0 + i as f64 / 100.0, 139.0).unwrap(),
            )
        })
        .collect()
}

/// Spot name embedded in a description prompt
pub fn prompt_spot_name(prompt: &DescriptionPrompt) -> String {
    prompt
        .as_str()
        .lines()
        .find_map(|l| l.strip_prefix("名称："))
        .unwrap_or_default()
        .to_string()
}

// ==================== Session Store ====================

#[derive(Default)]
pub struct MockSessionStore {
    entries: Mutex<HashMap<UserId, CategoryLabel>>,
    pub unavailable: bool,
}

impl MockSessionStore {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), SessionStoreError> {
        if self.unavailable {
            return Err(SessionStoreError::Unavailable("mock offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn get(&self, user_id: &UserId) -> Result<Option<CategoryLabel>, SessionStoreError> {
        self.check()?;
        Ok(self.entries.lock().unwrap().get(user_id).cloned())
    }

    async fn set(
        &self,
        user_id: &UserId,
        category: CategoryLabel,
    ) -> Result<Option<CategoryLabel>, SessionStoreError> {
        self.check()?;
        Ok(self.entries.lock().unwrap().insert(user_id.clone(), category))
    }

    async fn consume(&self, user_id: &UserId) -> Result<Option<CategoryLabel>, SessionStoreError> {
        self.check()?;
        Ok(self.entries.lock().unwrap().remove(user_id))
    }
}

// ==================== Place Search ====================

pub struct MockSearch {
    result: Result<Vec<SpotResult>, SearchError>,
    pub queries: Mutex<Vec<SearchQuery>>,
}

impl MockSearch {
    pub fn returning(spots: Vec<SpotResult>) -> Self {
        Self {
            result: Ok(spots),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: SearchError) -> Self {
        Self {
            result: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl PlaceSearchClient for MockSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SpotResult>, SearchError> {
        self.queries.lock().unwrap().push(query.clone());
        self.result.clone()
    }
}

// ==================== Description Generator ====================

/// Answers `generated:<spot name>`, failing for the configured names
#[derive(Default)]
pub struct MockGenerator {
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl MockGenerator {
    pub fn failing_for(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|n| n.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DescriptionGenerator for MockGenerator {
    async fn generate(&self, prompt: &DescriptionPrompt) -> Result<String, DescriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = prompt_spot_name(prompt);
        if self.failing.contains(&name) {
            return Err(DescriptionError::Request(format!("boom for {name}")));
        }
        Ok(format!("generated:{name}"))
    }
}

// ==================== Delivery Channel ====================

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub target: BatchTarget,
    /// Reply token for replies, user id for pushes
    pub address: String,
    pub messages: Vec<OutboundMessage>,
}

/// Records every call; calls whose zero-based position is in `failing` error out
#[derive(Default)]
pub struct MockChannel {
    pub calls: Mutex<Vec<RecordedCall>>,
    failing: HashSet<usize>,
}

impl MockChannel {
    pub fn failing_calls(positions: &[usize]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: positions.iter().copied().collect(),
        }
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(
        &self,
        target: BatchTarget,
        address: &str,
        messages: &[OutboundMessage],
    ) -> Result<(), DeliveryError> {
        let mut calls = self.calls.lock().unwrap();
        let position = calls.len();
        calls.push(RecordedCall {
            target,
            address: address.to_string(),
            messages: messages.to_vec(),
        });
        if self.failing.contains(&position) {
            return Err(DeliveryError::Rejected {
                status: 500,
                body: "mock failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DeliveryChannel for MockChannel {
    async fn reply(
        &self,
        reply_token: ReplyToken,
        messages: &[OutboundMessage],
    ) -> Result<(), DeliveryError> {
        self.record(BatchTarget::Reply, reply_token.as_str(), messages)
    }

    async fn push(
        &self,
        user_id: &UserId,
        messages: &[OutboundMessage],
    ) -> Result<(), DeliveryError> {
        self.record(BatchTarget::Push, user_id.as_str(), messages)
    }
}
