use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, Response, StatusCode};
use serde::Deserialize;

use crate::config::BackendConfig;
use crate::error::GatewayError;
use crate::tickers::{self, TickerSet};
use crate::types::{AnalysisRequest, AnalysisResult, MarketMetrics, NewsDigest, TransactionPreview};

use super::{GatewayResult, InsightGateway};

/// Reqwest-backed gateway to the insight backend.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

// Response envelopes, matching the backend contract field for field.

#[derive(Deserialize, Debug)]
pub(crate) struct UploadEnvelope {
    pub preview: TransactionPreview,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SentimentEnvelope {
    pub sentiment: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct StockDataEnvelope {
    pub data: MarketMetrics,
}

#[derive(Deserialize, Debug)]
pub(crate) struct NewsEnvelope {
    pub headlines: NewsDigest,
}

#[derive(Deserialize, Debug)]
pub(crate) struct AnalyzeEnvelope {
    pub recommendations: AnalysisResult,
}

impl HttpGateway {
    pub fn new(config: &BackendConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn error_body(resp: Response) -> (u16, String) {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        (status, body)
    }
}

#[async_trait]
impl InsightGateway for HttpGateway {
    async fn submit_transaction_file(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> GatewayResult<TransactionPreview> {
        let part = multipart::Part::bytes(contents).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}/upload-transactions", self.base_url);
        let resp = self.client.post(&url).multipart(form).send().await?;

        if !resp.status().is_success() {
            // The backend owns file parsing; a rejection here means the file
            // shape was unacceptable.
            let (status, body) = Self::error_body(resp).await;
            return Err(GatewayError::Format { status, body });
        }

        let envelope: UploadEnvelope = resp.json().await?;
        Ok(envelope.preview)
    }

    async fn submit_sentiment(&self, user_id: &str, text: &str) -> GatewayResult<String> {
        let url = format!("{}/get-sentiment", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "user_id": user_id,
                "sentiment": text,
            }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let (status, body) = Self::error_body(resp).await;
            return Err(GatewayError::Transport(format!("HTTP {status}: {body}")));
        }

        let envelope: SentimentEnvelope = resp.json().await?;
        Ok(envelope.sentiment)
    }

    async fn fetch_market_data(&self, tickers: &TickerSet) -> GatewayResult<MarketMetrics> {
        let url = format!(
            "{}/get-stock-data?tickers={}",
            self.base_url,
            tickers::to_query(tickers)
        );
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let (status, body) = Self::error_body(resp).await;
            return Err(GatewayError::Transport(format!("HTTP {status}: {body}")));
        }

        let envelope: StockDataEnvelope = resp.json().await?;
        Ok(envelope.data)
    }

    async fn fetch_news(&self, tickers: &TickerSet) -> GatewayResult<NewsDigest> {
        let url = format!(
            "{}/get-news?tickers={}",
            self.base_url,
            tickers::to_query(tickers)
        );
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let (status, body) = Self::error_body(resp).await;
            return Err(GatewayError::Transport(format!("HTTP {status}: {body}")));
        }

        let envelope: NewsEnvelope = resp.json().await?;
        Ok(envelope.headlines)
    }

    async fn request_analysis(&self, request: AnalysisRequest) -> GatewayResult<AnalysisResult> {
        let url = format!("{}/analyze", self.base_url);
        let resp = self.client.post(&url).json(&request).send().await?;

        let status = resp.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
            // Shape was fine, content was deemed insufficient.
            let (status, body) = Self::error_body(resp).await;
            return Err(GatewayError::Validation { status, body });
        }
        if !status.is_success() {
            let (status, body) = Self::error_body(resp).await;
            return Err(GatewayError::Transport(format!("HTTP {status}: {body}")));
        }

        let envelope: AnalyzeEnvelope = resp.json().await?;
        Ok(envelope.recommendations)
    }
}
