// Error types for psd2dash.
// Covers config and catalog loading plus misuse of the string-keyed entry points.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Unknown filter value: {0}")]
    UnknownFilter(String),

    #[error("Invalid catalog: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, DashError>;
