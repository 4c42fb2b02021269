use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The currently active step of the workflow. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Upload,
    Dashboard,
    SentimentCheck,
    MarketData,
    Analysis,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Upload => "upload",
            Stage::Dashboard => "dashboard",
            Stage::SentimentCheck => "sentiment",
            Stage::MarketData => "market",
            Stage::Analysis => "analysis",
        };
        f.write_str(name)
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upload" => Ok(Stage::Upload),
            "dashboard" => Ok(Stage::Dashboard),
            "sentiment" => Ok(Stage::SentimentCheck),
            "market" => Ok(Stage::MarketData),
            "analysis" => Ok(Stage::Analysis),
            other => Err(format!("unknown stage: {other}")),
        }
    }
}

/// One of the five independent units of asynchronous work. Each slot admits
/// at most one outstanding gateway call at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Upload,
    Sentiment,
    Market,
    News,
    Analysis,
}

impl Slot {
    pub const COUNT: usize = 5;

    pub(crate) fn index(self) -> usize {
        match self {
            Slot::Upload => 0,
            Slot::Sentiment => 1,
            Slot::Market => 2,
            Slot::News => 3,
            Slot::Analysis => 4,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Upload => "upload",
            Slot::Sentiment => "sentiment",
            Slot::Market => "market",
            Slot::News => "news",
            Slot::Analysis => "analysis",
        };
        f.write_str(name)
    }
}

/// One row of the uploaded transaction history, as previewed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub ticker: String,
    pub buy_date: NaiveDate,
    pub quantity: f64,
    pub price: f64,
}

pub type TransactionPreview = Vec<Transaction>;

/// The user's free-text sentiment and the backend's narrative reply, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SentimentExchange {
    pub input: String,
    pub response: Option<String>,
}

/// Fundamentals for one ticker. Tickers the backend cannot resolve are simply
/// absent from the batch; missing metrics come back as null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockMetric {
    pub ticker: String,
    pub pe_ratio: Option<f64>,
    pub eps: Option<f64>,
}

pub type MarketMetrics = Vec<StockMetric>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    pub source: String,
    pub link: Option<String>,
}

pub type NewsDigest = Vec<Headline>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::Buy => "BUY",
            Verdict::Sell => "SELL",
            Verdict::Hold => "HOLD",
        };
        f.write_str(name)
    }
}

/// The backend reports confidence either as a score in [0, 1] or as a
/// qualitative label such as "high".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Score(f64),
    Label(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub ticker: String,
    pub recommendation: Verdict,
    pub confidence: Confidence,
    pub reasoning: String,
}

pub type AnalysisResult = Vec<Recommendation>;

/// The assembled analyze payload. Sequence fields are plain `Vec`s so a
/// missing input is sent as an empty list, never as null.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub user_id: String,
    pub sentiment: String,
    pub transaction_history: TransactionPreview,
    pub current_metrics: MarketMetrics,
    pub news_summaries: NewsDigest,
}
