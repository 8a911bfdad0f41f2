//! Error Types
//!
//! Failures that can surface in the frontend. None of them are fatal:
//! callers log and fall back.

use thiserror::Error;

/// Invalid quantity input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("quantity {0} is outside {min}..={max}", min = crate::models::Quantity::MIN, max = crate::models::Quantity::MAX)]
    OutOfRange(i64),
    #[error("quantity {0:?} is not a number")]
    NotANumber(String),
}

/// Invalid page configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config block: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}
