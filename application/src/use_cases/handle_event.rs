//! Conversation handler
//!
//! Drives the two-step conversation for one inbound event: a text event
//! selects a category (or shows the menu), a location event spends the
//! pending category on one search and delivers the results.

use crate::config::PipelineConfig;
use crate::ports::delivery_channel::DeliveryChannel;
use crate::ports::description_generator::DescriptionGenerator;
use crate::ports::place_search::PlaceSearchClient;
use crate::ports::session_store::SessionStore;
use crate::use_cases::assemble_replies::assemble_replies;
use crate::use_cases::deliver_replies::{DeliveryReport, DeliveryScheduler};
use crate::use_cases::describe_spots::DescribeSpotsUseCase;
use crate::use_cases::search_spots::{SearchOutcome, SearchSpotsUseCase};
use concierge_domain::{
    CategoryLabel, CategoryMenu, ConversationState, Coordinates, InboundEvent, OutboundMessage,
    ReplyToken, UserId, preview, texts,
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Terminal outcome of handling one event
///
/// Every event ends in exactly one of these; none of them is an error the
/// transport has to deal with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleOutcome {
    /// A category was stored and a confirmation sent
    CategorySelected { category: CategoryLabel },
    /// Unrecognized text; the category menu was sent
    MenuShown,
    /// Location without a pending category; instructions were sent
    SessionMissing,
    /// Location that could not be used; the pending category is kept
    LocationRejected,
    /// The search found nothing for the consumed category
    NotFound { category: CategoryLabel },
    /// The search collaborator failed
    SearchFailed { category: CategoryLabel },
    /// The session store could not be reached
    StoreUnavailable,
    /// Results were assembled and handed to delivery
    ResultsDelivered {
        category: CategoryLabel,
        items: usize,
        delivery: DeliveryReport,
    },
}

impl HandleOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandleOutcome::CategorySelected { .. } => "category_selected",
            HandleOutcome::MenuShown => "menu_shown",
            HandleOutcome::SessionMissing => "session_missing",
            HandleOutcome::LocationRejected => "location_rejected",
            HandleOutcome::NotFound { .. } => "not_found",
            HandleOutcome::SearchFailed { .. } => "search_failed",
            HandleOutcome::StoreUnavailable => "store_unavailable",
            HandleOutcome::ResultsDelivered { .. } => "results_delivered",
        }
    }
}

/// Orchestrates the session store, search, description and delivery stages
pub struct ConversationHandler {
    menu: CategoryMenu,
    sessions: Arc<dyn SessionStore>,
    search: SearchSpotsUseCase,
    describe: DescribeSpotsUseCase,
    scheduler: DeliveryScheduler,
}

impl ConversationHandler {
    pub fn new(
        menu: CategoryMenu,
        sessions: Arc<dyn SessionStore>,
        search: Arc<dyn PlaceSearchClient>,
        generator: Arc<dyn DescriptionGenerator>,
        channel: Arc<dyn DeliveryChannel>,
        config: PipelineConfig,
    ) -> Self {
        let config = Arc::new(config);
        Self {
            menu,
            sessions,
            search: SearchSpotsUseCase::new(search, Arc::clone(&config)),
            describe: DescribeSpotsUseCase::new(generator, Arc::clone(&config)),
            scheduler: DeliveryScheduler::new(channel, config.batch_size),
        }
    }

    /// Handle one inbound event to completion
    pub async fn handle(&self, event: InboundEvent) -> HandleOutcome {
        let kind = event.kind();
        let outcome = match event {
            InboundEvent::Text {
                user_id,
                reply_token,
                text,
            } => self.on_text(user_id, reply_token, &text).await,
            InboundEvent::Location {
                user_id,
                reply_token,
                coordinates,
            } => self.on_location(user_id, reply_token, coordinates).await,
            InboundEvent::UnusableLocation {
                user_id,
                reply_token,
            } => {
                debug!(user_id = %user_id, "Location could not be read");
                self.scheduler
                    .reply_with(
                        reply_token,
                        &user_id,
                        OutboundMessage::text(texts::LOCATION_UNUSABLE),
                    )
                    .await;
                HandleOutcome::LocationRejected
            }
        };
        info!(event = kind, outcome = outcome.as_str(), "Event handled");
        outcome
    }

    async fn on_text(&self, user_id: UserId, reply_token: ReplyToken, text: &str) -> HandleOutcome {
        let Some(category) = self.menu.select(text) else {
            debug!(user_id = %user_id, text = %preview(text, 40), "Text is not a category");
            self.scheduler
                .reply_with(reply_token, &user_id, OutboundMessage::category_menu(&self.menu))
                .await;
            return HandleOutcome::MenuShown;
        };

        match self.sessions.set(&user_id, category.clone()).await {
            Ok(replaced) => {
                debug!(
                    user_id = %user_id,
                    category = %category,
                    replaced = ?replaced.as_ref().map(CategoryLabel::as_str),
                    "Category selected"
                );
                self.scheduler
                    .reply_with(
                        reply_token,
                        &user_id,
                        OutboundMessage::text(texts::confirmation(&category)),
                    )
                    .await;
                HandleOutcome::CategorySelected { category }
            }
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Failed to store category selection");
                self.reply_store_unavailable(reply_token, &user_id).await
            }
        }
    }

    async fn on_location(
        &self,
        user_id: UserId,
        reply_token: ReplyToken,
        coordinates: Coordinates,
    ) -> HandleOutcome {
        // Spend the selection before any collaborator call so a retried
        // event for the same user lands on the idle path.
        let consumed = self.sessions.consume(&user_id).await;
        let category = match consumed.map(ConversationState::from_pending) {
            Ok(ConversationState::CategorySelected(category)) => category,
            Ok(ConversationState::Idle) => {
                debug!(user_id = %user_id, "Location received without a category");
                self.scheduler
                    .reply_with(
                        reply_token,
                        &user_id,
                        OutboundMessage::text(texts::SESSION_MISSING),
                    )
                    .await;
                return HandleOutcome::SessionMissing;
            }
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Failed to consume category selection");
                return self.reply_store_unavailable(reply_token, &user_id).await;
            }
        };

        let spots = match self.search.execute(coordinates, &category).await {
            Ok(SearchOutcome::Found(spots)) => spots,
            Ok(SearchOutcome::Empty) => {
                self.scheduler
                    .reply_with(
                        reply_token,
                        &user_id,
                        OutboundMessage::text(texts::not_found(&category)),
                    )
                    .await;
                return HandleOutcome::NotFound { category };
            }
            Err(e) => {
                error!(user_id = %user_id, category = %category, error = %e, "Search failed");
                self.scheduler
                    .reply_with(
                        reply_token,
                        &user_id,
                        OutboundMessage::text(texts::SEARCH_FAILED),
                    )
                    .await;
                return HandleOutcome::SearchFailed { category };
            }
        };

        let descriptions = self.describe.execute(&spots, &category).await;
        let items = assemble_replies(&spots, descriptions);
        let count = items.len();

        let messages = items.into_iter().map(OutboundMessage::from).collect();
        let delivery = self.scheduler.dispatch(reply_token, &user_id, messages).await;
        info!(
            user_id = %user_id,
            category = %category,
            items = count,
            calls = delivery.calls,
            failed = delivery.failed,
            "Search results dispatched"
        );

        HandleOutcome::ResultsDelivered {
            category,
            items: count,
            delivery,
        }
    }

    async fn reply_store_unavailable(
        &self,
        reply_token: ReplyToken,
        user_id: &UserId,
    ) -> HandleOutcome {
        self.scheduler
            .reply_with(
                reply_token,
                user_id,
                OutboundMessage::text(texts::STORE_UNAVAILABLE),
            )
            .await;
        HandleOutcome::StoreUnavailable
    }
}
