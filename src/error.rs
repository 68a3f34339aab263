//! Error types for hwbot.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    /// Non-200 answer from the status endpoint. Carries everything
    /// needed to diagnose the request after the fact.
    #[error(
        "no success from server: from_date = {from_date}; http_code = {status}; \
         reason = {reason}; content = {body}"
    )]
    ServerResponse {
        from_date: i64,
        status: u16,
        reason: String,
        body: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response shape: expected {expected}, got {actual}")]
    Shape {
        expected: &'static str,
        actual: String,
    },

    #[error("homework record is missing required field {0:?}")]
    MissingData(&'static str),

    #[error("unknown homework status {0:?}")]
    UnknownStatus(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
