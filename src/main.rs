mod render;

use std::str::FromStr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use portfolio_insight::config::AppConfig;
use portfolio_insight::controller::WorkflowController;
use portfolio_insight::events::{Event, Intent};
use portfolio_insight::gateway::HttpGateway;
use portfolio_insight::types::Stage;
use portfolio_insight::EventBus;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Setup Logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    dotenvy::dotenv().ok();

    info!("Starting Portfolio Insight...");

    // Load Configuration
    let mut config = match AppConfig::load("config.yaml") {
        Ok(config) => config,
        Err(err) => {
            warn!("config.yaml not usable ({err}), falling back to defaults");
            AppConfig::default()
        }
    };
    if let Ok(url) = std::env::var("INSIGHT_API_BASE_URL") {
        info!("Overriding backend base URL from environment: {}", url);
        config.backend.base_url = url;
    }
    info!("Backend: {}", config.backend.base_url);

    let gateway = Arc::new(HttpGateway::new(&config.backend)?);
    let bus = EventBus::new(config.bus_capacity);
    let controller = Arc::new(WorkflowController::new(gateway, bus.clone(), config.user_id));

    // Render task: redraws on every published snapshot.
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            match event {
                Event::Snapshot(snapshot) => render::draw(&snapshot),
                Event::SlotFailed { slot, message } => {
                    eprintln!("!! {slot} request failed: {message}");
                }
            }
        }
    });

    render::draw(&controller.snapshot());
    render::help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        if line == "help" {
            render::help();
            continue;
        }

        let intent = match parse_intent(&line).await {
            Ok(intent) => intent,
            Err(msg) => {
                eprintln!("!! {msg}");
                continue;
            }
        };

        // Each intent runs on its own task so independent slots (for example
        // market data and news) can be outstanding at the same time.
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            if let Err(err) = controller.handle(intent).await {
                eprintln!("!! {err}");
            }
        });
    }

    Ok(())
}

async fn parse_intent(line: &str) -> Result<Intent, String> {
    let (command, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "upload" => {
            if rest.is_empty() {
                return Err("usage: upload <path-to-csv>".to_string());
            }
            let contents = tokio::fs::read(rest)
                .await
                .map_err(|e| format!("cannot read {rest}: {e}"))?;
            let file_name = std::path::Path::new(rest)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "transactions.csv".to_string());
            Ok(Intent::FileChosen {
                file_name,
                contents,
            })
        }
        "nav" => {
            let target = Stage::from_str(rest)?;
            Ok(Intent::Navigate { target })
        }
        "sentiment" => Ok(Intent::SentimentSubmitted {
            text: rest.to_string(),
        }),
        "market" => Ok(Intent::MarketTickersSubmitted {
            raw: rest.to_string(),
        }),
        "news" => Ok(Intent::NewsTickersSubmitted {
            raw: rest.to_string(),
        }),
        "analyze" => Ok(Intent::AnalyzeRequested),
        "reset" => Ok(Intent::Reset),
        other => Err(format!("unknown command: {other} (try 'help')")),
    }
}
