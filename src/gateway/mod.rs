//! Data source gateway: one uniform operation per external resource
//!
//! Pure transport plus decoding; no business logic and no retries. Retry
//! policy, such as it is, belongs to the user re-issuing the intent.

pub mod http;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::tickers::TickerSet;
use crate::types::{AnalysisRequest, AnalysisResult, MarketMetrics, NewsDigest, TransactionPreview};

pub use http::HttpGateway;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// The five backend exchanges the workflow depends on. Object-safe so the
/// controller can hold `Arc<dyn InsightGateway>` and tests can substitute
/// scripted doubles.
#[async_trait]
pub trait InsightGateway: Send + Sync {
    /// Upload a raw transaction-history file; the backend owns CSV parsing.
    async fn submit_transaction_file(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> GatewayResult<TransactionPreview>;

    /// Send free-text market sentiment; returns the narrative reply.
    async fn submit_sentiment(&self, user_id: &str, text: &str) -> GatewayResult<String>;

    /// Fetch fundamentals for a set of tickers. Tickers without data are
    /// omitted from the result, not reported as errors.
    async fn fetch_market_data(&self, tickers: &TickerSet) -> GatewayResult<MarketMetrics>;

    /// Fetch headlines scoped to a set of tickers.
    async fn fetch_news(&self, tickers: &TickerSet) -> GatewayResult<NewsDigest>;

    /// Submit the aggregated snapshot for portfolio analysis.
    async fn request_analysis(&self, request: AnalysisRequest) -> GatewayResult<AnalysisResult>;
}
