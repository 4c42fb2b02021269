//! Portfolio Insight - client-side portfolio analysis workflow
//!
//! This library provides the core workflow orchestration: the stage state
//! machine, the aggregation of transaction, sentiment, market and news data,
//! and the assembly of the final portfolio-analysis request. Rendering is an
//! external concern fed through the event bus.

pub mod bus;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod events;
pub mod gateway;
pub mod state;
pub mod tickers;
pub mod types;

// Re-export commonly used types
pub use bus::EventBus;
pub use config::AppConfig;
pub use controller::WorkflowController;
pub use error::{GatewayError, WorkflowError};
pub use events::{Event, Intent};
pub use gateway::{GatewayResult, HttpGateway, InsightGateway};
pub use state::AggregationState;
pub use types::{Slot, Stage};

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod tickers_tests;
#[cfg(test)]
mod types_tests;
