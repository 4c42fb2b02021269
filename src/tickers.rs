//! Ticker-list normalization
//!
//! The market and news screens take a raw comma-separated ticker string from
//! the user. Normalization is kept as a pure function so it can be tested
//! independently of the controller.

use std::collections::BTreeSet;

/// Canonical set of ticker symbols: uppercased, trimmed, deduplicated.
pub type TickerSet = BTreeSet<String>;

/// Parse a raw comma-separated ticker string into a canonical set.
/// Empty segments (doubled commas, trailing commas, whitespace) are dropped.
pub fn normalize(raw: &str) -> TickerSet {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Comma-join a ticker set for use in a query string. Deterministic because
/// the set is ordered.
pub fn to_query(tickers: &TickerSet) -> String {
    tickers.iter().cloned().collect::<Vec<_>>().join(",")
}
