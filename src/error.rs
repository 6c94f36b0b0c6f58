//! Error types for the SWC fantasy football API

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SwcError>;

#[derive(Error, Debug)]
pub enum SwcError {
    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid bind address '{value}' (from {source_name})")]
    InvalidBindAddress { value: String, source_name: String },

    #[error("Could not determine a data directory; pass --db or set {env_var}")]
    MissingDataDir { env_var: String },

    #[error("Database not found at {path}; run `swc-ffl init-db` and load data first")]
    DatabaseMissing { path: String },
}
