use crate::state::AggregationState;
use crate::types::{Slot, Stage};

/// User intents emitted by the presentation adapter.
#[derive(Clone, Debug)]
pub enum Intent {
    FileChosen { file_name: String, contents: Vec<u8> },
    Navigate { target: Stage },
    SentimentSubmitted { text: String },
    MarketTickersSubmitted { raw: String },
    NewsTickersSubmitted { raw: String },
    AnalyzeRequested,
    Reset,
}

/// Notifications published by the controller for the presentation adapter.
#[derive(Clone, Debug)]
pub enum Event {
    /// A fresh immutable snapshot; published on every observable state change.
    Snapshot(AggregationState),
    /// A gateway call failed; its slot stays unresolved and may be retried.
    SlotFailed { slot: Slot, message: String },
}
