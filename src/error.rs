//! Custom error types for the workflow core
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use thiserror::Error;

use crate::types::{Slot, Stage};

/// Failures of a single gateway exchange. The controller surfaces these
/// verbatim; neither layer retries automatically.
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("backend rejected the input (HTTP {status}): {body}")]
    Format { status: u16, body: String },

    #[error("backend deemed the inputs insufficient (HTTP {status}): {body}")]
    Validation { status: u16, body: String },
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

/// Controller-level failures. None of these are fatal: the stage never
/// regresses and the user may retry the same intent.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("{intent} is not available on the {stage} screen")]
    WrongStage { intent: &'static str, stage: Stage },

    #[error("cannot open {target} before a transaction history is uploaded")]
    UploadRequired { target: Stage },

    #[error("cannot navigate to {target}; only reset returns to the upload screen")]
    InvalidNavigation { target: Stage },

    #[error("sentiment input is blank")]
    BlankInput,

    #[error("no tickers given")]
    EmptyTickers,

    #[error("a {slot} request is already in flight")]
    SlotBusy { slot: Slot },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}
