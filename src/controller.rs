//! Workflow controller: the stage state machine
//!
//! Receives user intents, validates them against the current stage, issues
//! gateway calls (at most one outstanding per slot) and merges results into
//! the aggregation state. Every observable change is published on the event
//! bus as a fresh snapshot.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::bus::EventBus;
use crate::constants::events;
use crate::error::{GatewayError, WorkflowError};
use crate::events::{Event, Intent};
use crate::gateway::InsightGateway;
use crate::state::{AggregationState, StateStore, Ticket};
use crate::tickers;
use crate::types::{AnalysisRequest, SentimentExchange, Slot, Stage};

pub struct WorkflowController {
    gateway: Arc<dyn InsightGateway>,
    store: StateStore,
    bus: EventBus,
    user_id: String,
}

impl WorkflowController {
    pub fn new(gateway: Arc<dyn InsightGateway>, bus: EventBus, user_id: impl Into<String>) -> Self {
        Self {
            gateway,
            store: StateStore::new(),
            bus,
            user_id: user_id.into(),
        }
    }

    /// Current snapshot, for pull-style rendering.
    pub fn snapshot(&self) -> AggregationState {
        self.store.snapshot()
    }

    /// Single entry point for the presentation adapter.
    pub async fn handle(&self, intent: Intent) -> Result<(), WorkflowError> {
        match intent {
            Intent::FileChosen {
                file_name,
                contents,
            } => self.upload_transactions(&file_name, contents).await,
            Intent::Navigate { target } => self.navigate(target),
            Intent::SentimentSubmitted { text } => self.submit_sentiment(&text).await,
            Intent::MarketTickersSubmitted { raw } => self.fetch_market_data(&raw).await,
            Intent::NewsTickersSubmitted { raw } => self.fetch_news(&raw).await,
            Intent::AnalyzeRequested => self.analyze().await,
            Intent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Upload the transaction history file. On success the preview is stored
    /// and the workflow advances to the dashboard.
    pub async fn upload_transactions(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<(), WorkflowError> {
        let ticket = self.begin(Slot::Upload, "upload", Some(Stage::Upload))?;

        match self
            .gateway
            .submit_transaction_file(file_name, contents)
            .await
        {
            Ok(preview) => {
                let rows = preview.len();
                if self.commit(ticket, |state| {
                    state.transactions = Some(preview);
                    state.stage = Stage::Dashboard;
                }) {
                    info!(event = events::UPLOAD_ACCEPTED, rows, "transaction preview loaded");
                }
                Ok(())
            }
            Err(err) => self.fail(ticket, err),
        }
    }

    /// Pure navigation between post-upload stages. Never blocks on data
    /// presence: a user may visit the market screen before submitting any
    /// sentiment, and each screen tolerates the other fields being empty.
    pub fn navigate(&self, target: Stage) -> Result<(), WorkflowError> {
        if target == Stage::Upload {
            return Err(WorkflowError::InvalidNavigation { target });
        }
        if self.store.snapshot().transactions.is_none() {
            return Err(WorkflowError::UploadRequired { target });
        }
        self.store.set_stage(target);
        info!(event = events::STAGE_CHANGED, stage = %target, "navigated");
        self.publish_snapshot();
        Ok(())
    }

    /// Submit the user's free-text sentiment. Blank input is rejected before
    /// any network exchange. The stage stays on the sentiment screen.
    pub async fn submit_sentiment(&self, text: &str) -> Result<(), WorkflowError> {
        if text.trim().is_empty() {
            return Err(WorkflowError::BlankInput);
        }
        let ticket = self.begin(Slot::Sentiment, "sentiment", Some(Stage::SentimentCheck))?;
        let input = text.to_string();

        match self.gateway.submit_sentiment(&self.user_id, text).await {
            Ok(response) => {
                if self.commit(ticket, |state| {
                    state.sentiment = SentimentExchange {
                        input,
                        response: Some(response),
                    };
                }) {
                    info!(event = events::SENTIMENT_REPLY, "sentiment reply received");
                }
                Ok(())
            }
            Err(err) => self.fail(ticket, err),
        }
    }

    /// Fetch fundamentals for the given raw ticker string.
    pub async fn fetch_market_data(&self, raw_tickers: &str) -> Result<(), WorkflowError> {
        let set = tickers::normalize(raw_tickers);
        if set.is_empty() {
            return Err(WorkflowError::EmptyTickers);
        }
        let ticket = self.begin(Slot::Market, "market data", Some(Stage::MarketData))?;

        match self.gateway.fetch_market_data(&set).await {
            Ok(metrics) => {
                let count = metrics.len();
                if self.commit(ticket, |state| {
                    state.market = Some(metrics);
                }) {
                    info!(event = events::MARKET_DATA_LOADED, tickers = count, "market data loaded");
                }
                Ok(())
            }
            Err(err) => self.fail(ticket, err),
        }
    }

    /// Fetch headlines for the given raw ticker string. Shares the market
    /// screen with the fundamentals fetch but runs in its own slot, so both
    /// may be outstanding at once.
    pub async fn fetch_news(&self, raw_tickers: &str) -> Result<(), WorkflowError> {
        let set = tickers::normalize(raw_tickers);
        if set.is_empty() {
            return Err(WorkflowError::EmptyTickers);
        }
        let ticket = self.begin(Slot::News, "news", Some(Stage::MarketData))?;

        match self.gateway.fetch_news(&set).await {
            Ok(headlines) => {
                let count = headlines.len();
                if self.commit(ticket, |state| {
                    state.news = Some(headlines);
                }) {
                    info!(event = events::NEWS_LOADED, headlines = count, "news loaded");
                }
                Ok(())
            }
            Err(err) => self.fail(ticket, err),
        }
    }

    /// Submit whatever snapshot exists right now for analysis. Missing inputs
    /// go out as empty sequences; partial analysis is a supported condition,
    /// not an error.
    pub async fn analyze(&self) -> Result<(), WorkflowError> {
        let ticket = self.begin(Slot::Analysis, "analyze", Some(Stage::Analysis))?;

        let snapshot = self.store.snapshot();
        let request = AnalysisRequest {
            user_id: self.user_id.clone(),
            sentiment: snapshot.sentiment.input,
            transaction_history: snapshot.transactions.unwrap_or_default(),
            current_metrics: snapshot.market.unwrap_or_default(),
            news_summaries: snapshot.news.unwrap_or_default(),
        };

        match self.gateway.request_analysis(request).await {
            Ok(recommendations) => {
                let count = recommendations.len();
                if self.commit(ticket, |state| {
                    state.analysis = Some(recommendations);
                }) {
                    info!(event = events::ANALYSIS_READY, recommendations = count, "analysis ready");
                }
                Ok(())
            }
            Err(err) => self.fail(ticket, err),
        }
    }

    /// Clear everything and return to the upload screen. Advances the
    /// generation counter so any still-outstanding completion is discarded
    /// when it arrives.
    pub fn reset(&self) {
        self.store.reset();
        info!(event = events::WORKFLOW_RESET, "workflow reset");
        self.publish_snapshot();
    }

    fn begin(
        &self,
        slot: Slot,
        intent: &'static str,
        required_stage: Option<Stage>,
    ) -> Result<Ticket, WorkflowError> {
        if let Some(required) = required_stage {
            let stage = self.store.stage();
            if stage != required {
                return Err(WorkflowError::WrongStage { intent, stage });
            }
        }
        let ticket = self
            .store
            .begin(slot)
            .ok_or(WorkflowError::SlotBusy { slot })?;
        // Let subscribers see the loading flag while the call is outstanding.
        self.publish_snapshot();
        Ok(ticket)
    }

    /// Apply a successful completion and publish, unless the ticket went
    /// stale (reset happened while the call was in flight).
    fn commit(&self, ticket: Ticket, write: impl FnOnce(&mut AggregationState)) -> bool {
        if self.store.complete(ticket, write) {
            self.publish_snapshot();
            true
        } else {
            debug!(event = events::STALE_DISCARDED, slot = %ticket.slot(), "stale completion discarded");
            false
        }
    }

    fn fail(&self, ticket: Ticket, err: GatewayError) -> Result<(), WorkflowError> {
        let slot = ticket.slot();
        if self.store.abort(ticket) {
            warn!(event = events::SLOT_FAILED, slot = %slot, error = %err, "gateway call failed");
            let _ = self.bus.publish(Event::SlotFailed {
                slot,
                message: err.to_string(),
            });
            self.publish_snapshot();
            Err(WorkflowError::Gateway(err))
        } else {
            // The workflow was reset while this call was in flight.
            debug!(event = events::STALE_DISCARDED, slot = %slot, "stale failure discarded");
            Ok(())
        }
    }

    fn publish_snapshot(&self) {
        let _ = self.bus.publish(Event::Snapshot(self.store.snapshot()));
    }
}
