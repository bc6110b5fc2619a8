//! The module contains the errors the engine can return.
//!
//! Aggregations are total and never fail. Errors only come out of the parsing
//! boundary, where raw record fields are turned into typed values:
//!
//! - [`InvalidDate`] thrown when an order or budget date cannot be parsed.
//! - [`InvalidPeriod`] thrown when a budget period type is unknown.
//! - [`InvalidCurrency`] thrown when a currency code is malformed.
//! - [`KeyNotFound`] thrown when a looked-up record is missing.
//! - [`InvalidConfig`] thrown when engine options are out of range.
//!
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`InvalidPeriod`]: EngineError::InvalidPeriod
//!  [`InvalidCurrency`]: EngineError::InvalidCurrency
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidConfig`]: EngineError::InvalidConfig
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
