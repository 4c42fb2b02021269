//! Application-wide constants and defaults
//!
//! Centralizes hardcoded values so they are easy to find and tune.

/// Backend connection defaults
pub mod backend {
    /// Base URL of the insight backend when none is configured
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

    /// Per-request timeout for gateway calls (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Workflow defaults
pub mod workflow {
    /// Static placeholder identity; session handling is out of scope
    pub const DEFAULT_USER_ID: &str = "user123";

    /// Capacity of the snapshot broadcast channel
    pub const DEFAULT_BUS_CAPACITY: usize = 64;
}

/// Logging event names for structured logging
pub mod events {
    pub const UPLOAD_ACCEPTED: &str = "upload_accepted";
    pub const SENTIMENT_REPLY: &str = "sentiment_reply";
    pub const MARKET_DATA_LOADED: &str = "market_data_loaded";
    pub const NEWS_LOADED: &str = "news_loaded";
    pub const ANALYSIS_READY: &str = "analysis_ready";
    pub const SLOT_FAILED: &str = "slot_failed";
    pub const STALE_DISCARDED: &str = "stale_discarded";
    pub const WORKFLOW_RESET: &str = "workflow_reset";
    pub const STAGE_CHANGED: &str = "stage_changed";
}
