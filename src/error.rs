// src/error.rs
//! Error taxonomy for one search invocation.
//!
//! Only two conditions abort an invocation: a malformed intent and a
//! provider failure. Per-record conditions (missing title/link, ineligible
//! image, date-format fallback) are never errors — they are handled inline
//! by the pipeline.

/// Errors that can abort a search invocation.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Malformed or incomplete search intent; raised before any provider call.
    #[error("invalid search request: {0}")]
    Validation(String),

    /// The news provider failed (network, rate limit, upstream error).
    #[error("provider error: {0}")]
    Provider(String),

    /// An HTTP request to the provider could not be completed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider's response could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid application configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
