//! Unit tests for the domain data model and its wire shapes.

#[cfg(test)]
mod types_tests {
    use std::str::FromStr;

    use crate::types::{
        AnalysisRequest, Confidence, Recommendation, Stage, StockMetric, Transaction, Verdict,
    };

    #[test]
    fn test_transaction_deserialize() {
        let json = r#"{"ticker":"AAPL","buy_date":"2024-01-15","quantity":10,"price":185.5}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(tx.ticker, "AAPL");
        assert_eq!(tx.buy_date.to_string(), "2024-01-15");
        assert_eq!(tx.quantity, 10.0);
        assert_eq!(tx.price, 185.5);
    }

    #[test]
    fn test_stock_metric_with_null_fields() {
        let json = r#"{"ticker":"GOOGL","pe_ratio":null,"eps":6.12}"#;
        let metric: StockMetric = serde_json::from_str(json).unwrap();

        assert_eq!(metric.ticker, "GOOGL");
        assert!(metric.pe_ratio.is_none());
        assert_eq!(metric.eps, Some(6.12));
    }

    #[test]
    fn test_verdict_uses_uppercase_wire_names() {
        assert_eq!(
            serde_json::from_str::<Verdict>(r#""BUY""#).unwrap(),
            Verdict::Buy
        );
        assert_eq!(serde_json::to_string(&Verdict::Hold).unwrap(), r#""HOLD""#);
    }

    #[test]
    fn test_confidence_accepts_score_or_label() {
        let rec: Recommendation = serde_json::from_str(
            r#"{"ticker":"MSFT","recommendation":"SELL","confidence":0.82,"reasoning":"overvalued"}"#,
        )
        .unwrap();
        assert_eq!(rec.confidence, Confidence::Score(0.82));

        let rec: Recommendation = serde_json::from_str(
            r#"{"ticker":"MSFT","recommendation":"HOLD","confidence":"high","reasoning":"steady"}"#,
        )
        .unwrap();
        assert_eq!(rec.confidence, Confidence::Label("high".to_string()));
    }

    #[test]
    fn test_analysis_request_serializes_empty_vecs_as_lists() {
        let request = AnalysisRequest {
            user_id: "user123".to_string(),
            sentiment: String::new(),
            transaction_history: vec![],
            current_metrics: vec![],
            news_summaries: vec![],
        };

        let value = serde_json::to_value(&request).unwrap();
        // Missing inputs must go out as [], never as null
        assert!(value["transaction_history"].is_array());
        assert!(value["current_metrics"].is_array());
        assert!(value["news_summaries"].is_array());
        assert_eq!(value["user_id"], "user123");
        assert_eq!(value["sentiment"], "");
    }

    #[test]
    fn test_stage_from_str_matches_nav_ids() {
        assert_eq!(Stage::from_str("dashboard").unwrap(), Stage::Dashboard);
        assert_eq!(Stage::from_str("sentiment").unwrap(), Stage::SentimentCheck);
        assert_eq!(Stage::from_str(" MARKET ").unwrap(), Stage::MarketData);
        assert_eq!(Stage::from_str("analysis").unwrap(), Stage::Analysis);
        assert!(Stage::from_str("settings").is_err());
    }

    #[test]
    fn test_stage_default_is_upload() {
        assert_eq!(Stage::default(), Stage::Upload);
    }
}
