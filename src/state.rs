//! Aggregation state: the single authoritative data container
//!
//! `AggregationState` is a plain value with copy-on-write semantics: readers
//! only ever see cloned snapshots, and each successful gateway completion
//! replaces exactly one field under the store's lock, so a renderer can never
//! observe a torn intermediate state.

use std::sync::{Arc, Mutex};

use crate::types::{
    AnalysisResult, MarketMetrics, NewsDigest, SentimentExchange, Slot, Stage, TransactionPreview,
};

/// Snapshot of everything the workflow has aggregated so far.
///
/// `Default` is the process-start state: stage `Upload`, every slot empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregationState {
    pub stage: Stage,
    pub transactions: Option<TransactionPreview>,
    pub sentiment: SentimentExchange,
    pub market: Option<MarketMetrics>,
    pub news: Option<NewsDigest>,
    pub analysis: Option<AnalysisResult>,
    /// True while any slot has an outstanding gateway call.
    pub is_loading: bool,
}

/// Token handed out when a slot's gateway call is issued. Completions present
/// it back; a reset in between invalidates it via the generation counter.
#[derive(Clone, Copy, Debug)]
pub struct Ticket {
    slot: Slot,
    generation: u64,
}

impl Ticket {
    pub fn slot(&self) -> Slot {
        self.slot
    }
}

struct Inner {
    state: AggregationState,
    in_flight: [bool; Slot::COUNT],
    generation: u64,
}

impl Inner {
    fn sync_loading(&mut self) {
        self.state.is_loading = self.in_flight.iter().any(|f| *f);
    }
}

/// Shared holder of the aggregation state, the per-slot in-flight flags and
/// the reset generation counter. Owned by the controller; clones share the
/// same underlying state.
#[derive(Clone)]
pub struct StateStore {
    inner: Arc<Mutex<Inner>>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: AggregationState::default(),
                in_flight: [false; Slot::COUNT],
                generation: 0,
            })),
        }
    }

    /// Immutable snapshot of the current state.
    pub fn snapshot(&self) -> AggregationState {
        self.inner.lock().unwrap().state.clone()
    }

    pub fn stage(&self) -> Stage {
        self.inner.lock().unwrap().state.stage
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().unwrap().state.is_loading
    }

    /// Mark a slot as having an outstanding call. Returns `None` if the slot
    /// is already busy; the caller must not issue a second exchange then.
    pub fn begin(&self, slot: Slot) -> Option<Ticket> {
        let mut inner = self.inner.lock().unwrap();
        if inner.in_flight[slot.index()] {
            return None;
        }
        inner.in_flight[slot.index()] = true;
        inner.sync_loading();
        Some(Ticket {
            slot,
            generation: inner.generation,
        })
    }

    /// Apply a successful completion. `write` replaces exactly one field of
    /// the state (plus the stage transition it implies, if any). Returns
    /// false when the ticket is stale, in which case nothing is touched.
    pub fn complete(
        &self,
        ticket: Ticket,
        write: impl FnOnce(&mut AggregationState),
    ) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.generation != ticket.generation {
            return false;
        }
        inner.in_flight[ticket.slot.index()] = false;
        write(&mut inner.state);
        inner.sync_loading();
        true
    }

    /// Record a failed completion: the slot's field stays untouched, only the
    /// in-flight flag clears. Returns false when the ticket is stale.
    pub fn abort(&self, ticket: Ticket) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.generation != ticket.generation {
            return false;
        }
        inner.in_flight[ticket.slot.index()] = false;
        inner.sync_loading();
        true
    }

    /// Pure navigation between post-upload stages.
    pub fn set_stage(&self, stage: Stage) {
        self.inner.lock().unwrap().state.stage = stage;
    }

    /// Atomically restore the initial empty state and advance the generation
    /// counter so any still-outstanding completion is discarded on arrival.
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.state = AggregationState::default();
        inner.in_flight = [false; Slot::COUNT];
        inner.generation += 1;
    }
}
