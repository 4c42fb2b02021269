//! Plain-text presentation adapter for the terminal binary.
//!
//! Consumes immutable snapshots only; all mutation goes through the
//! controller as intents.

use portfolio_insight::state::AggregationState;
use portfolio_insight::types::{Confidence, Stage};

pub fn help() {
    println!("commands:");
    println!("  upload <path>        upload a transaction history CSV");
    println!("  nav <stage>          go to dashboard | sentiment | market | analysis");
    println!("  sentiment <text>     share how you feel about the market");
    println!("  market <tickers>     fetch metrics, e.g. market AAPL,GOOGL");
    println!("  news <tickers>       fetch headlines for tickers");
    println!("  analyze              run the portfolio analysis");
    println!("  reset                clear everything and start over");
    println!("  quit                 exit");
}

pub fn draw(snapshot: &AggregationState) {
    println!();
    println!(
        "== {} =={}",
        snapshot.stage,
        if snapshot.is_loading { " (loading...)" } else { "" }
    );

    match snapshot.stage {
        Stage::Upload => {
            println!("Upload your transaction history CSV to begin.");
        }
        Stage::Dashboard => {
            if let Some(preview) = &snapshot.transactions {
                println!("{:<8} {:<12} {:>10} {:>10}", "ticker", "buy date", "qty", "price");
                for tx in preview {
                    println!(
                        "{:<8} {:<12} {:>10} {:>10.2}",
                        tx.ticker,
                        tx.buy_date.to_string(),
                        tx.quantity,
                        tx.price
                    );
                }
            }
        }
        Stage::SentimentCheck => {
            println!("How are you feeling about the market today?");
            if let Some(response) = &snapshot.sentiment.response {
                println!("response: {response}");
            }
        }
        Stage::MarketData => {
            if let Some(metrics) = &snapshot.market {
                for m in metrics {
                    println!(
                        "{:<8} pe: {:<10} eps: {}",
                        m.ticker,
                        m.pe_ratio.map_or("-".to_string(), |v| v.to_string()),
                        m.eps.map_or("-".to_string(), |v| v.to_string()),
                    );
                }
            }
            if let Some(news) = &snapshot.news {
                for h in news {
                    println!("* {} ({})", h.title, h.source);
                    if let Some(link) = &h.link {
                        println!("  {link}");
                    }
                }
            }
        }
        Stage::Analysis => {
            if let Some(recommendations) = &snapshot.analysis {
                for rec in recommendations {
                    let confidence = match &rec.confidence {
                        Confidence::Score(v) => format!("{v:.2}"),
                        Confidence::Label(s) => s.clone(),
                    };
                    println!(
                        "{:<8} {} (confidence {confidence})",
                        rec.ticker, rec.recommendation
                    );
                    println!("  {}", rec.reasoning);
                }
            } else {
                println!("Run 'analyze' to get recommendations.");
            }
        }
    }
}
