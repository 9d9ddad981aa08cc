//! Error taxonomy for an ingestion run.
//!
//! Each error maps to a different blast radius: an [`AuthError`] aborts the run,
//! a [`FetchError`] empties the batch, and a [`StoreError`] drops a single row.

use thiserror::Error;

/// Token exchange failures. Always terminal for the run.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("missing API credentials (set TWITTER_API_KEY and TWITTER_API_SECRET)")]
    MissingCredentials,

    #[error("token endpoint returned HTTP {0}")]
    Rejected(reqwest::StatusCode),

    #[error("token response did not contain an access token")]
    MissingToken,

    #[error("token request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Search failures. The run continues with an empty batch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("max_results must be between 1 and 100, got {0}")]
    InvalidMaxResults(u32),

    #[error("search endpoint returned HTTP {status}: {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Database failures. Only the row being written is lost.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading or validation error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
